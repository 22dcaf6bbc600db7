//! Repository for the `restaurant_pizzas` join table.

use crate::models::{CreatedRestaurantPizza, DbId, NewRestaurantPizza, RestaurantPizza};
use crate::service::{PizzaRepo, RestaurantRepo};
use sqlx::{Executor, Sqlite, SqlitePool};

const COLUMNS: &str = "id, price, restaurant_id, pizza_id, created_at";

pub struct RestaurantPizzaRepo;

impl RestaurantPizzaRepo {
    /// Plain insert. Foreign keys are checked by the database only.
    pub async fn insert<'e, E>(executor: E, input: &NewRestaurantPizza) -> Result<RestaurantPizza, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RestaurantPizza>(&query)
            .bind(input.price)
            .bind(input.restaurant_id)
            .bind(input.pizza_id)
            .fetch_one(executor)
            .await
    }

    /// Insert a join row and load both ends in one transaction.
    ///
    /// Returns `None` when the restaurant or pizza does not exist; nothing is persisted in that
    /// case. Any error also leaves the store unchanged.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewRestaurantPizza,
    ) -> Result<Option<CreatedRestaurantPizza>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let restaurant_pizza = Self::insert(&mut *tx, input).await?;
        let Some(restaurant) = RestaurantRepo::find_by_id(&mut *tx, input.restaurant_id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };
        let Some(pizza) = PizzaRepo::find_by_id(&mut *tx, input.pizza_id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };
        tx.commit().await?;
        tracing::info!(
            restaurant_pizza_id = restaurant_pizza.id,
            restaurant_id = restaurant.id,
            pizza_id = pizza.id,
            "restaurant_pizza created"
        );
        Ok(Some(CreatedRestaurantPizza {
            restaurant_pizza,
            restaurant,
            pizza,
        }))
    }

    /// Join rows of one restaurant, ascending id.
    pub async fn find_by_restaurant<'e, E>(executor: E, restaurant_id: DbId) -> Result<Vec<RestaurantPizza>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM restaurant_pizzas WHERE restaurant_id = ? ORDER BY id");
        sqlx::query_as::<_, RestaurantPizza>(&query)
            .bind(restaurant_id)
            .fetch_all(executor)
            .await
    }

    /// Returns the number of rows removed.
    pub async fn delete_by_restaurant<'e, E>(executor: E, restaurant_id: DbId) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(restaurant_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
