//! Repository for the `restaurants` table.

use crate::models::{DbId, MenuItem, Pizza, Restaurant, RestaurantMenu};
use crate::service::{PizzaRepo, RestaurantPizzaRepo};
use sqlx::{Executor, Sqlite, SqlitePool};
use std::collections::HashMap;

const COLUMNS: &str = "id, name, address, created_at";

pub struct RestaurantRepo;

impl RestaurantRepo {
    pub async fn create<'e, E>(executor: E, name: &str, address: &str) -> Result<Restaurant, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(name)
            .bind(address)
            .fetch_one(executor)
            .await
    }

    /// All restaurants, ascending id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants ORDER BY id");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, Restaurant>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Restaurant>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = ?");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Restaurant with its join rows and their pizzas, read in one transaction.
    pub async fn find_menu(pool: &SqlitePool, id: DbId) -> Result<Option<RestaurantMenu>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(restaurant) = Self::find_by_id(&mut *tx, id).await? else {
            return Ok(None);
        };
        let rows = RestaurantPizzaRepo::find_by_restaurant(&mut *tx, id).await?;
        let pizza_ids: Vec<DbId> = rows.iter().map(|rp| rp.pizza_id).collect();
        let pizzas: HashMap<DbId, Pizza> = PizzaRepo::find_by_ids(&mut *tx, &pizza_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        tx.commit().await?;

        let items = rows
            .into_iter()
            .filter_map(|rp| match pizzas.get(&rp.pizza_id) {
                Some(pizza) => Some(MenuItem {
                    pizza: pizza.clone(),
                    restaurant_pizza: rp,
                }),
                None => {
                    tracing::warn!(restaurant_pizza_id = rp.id, pizza_id = rp.pizza_id, "join row without pizza");
                    None
                }
            })
            .collect();
        Ok(Some(RestaurantMenu { restaurant, items }))
    }

    /// Delete the restaurant and its join rows atomically. Returns false (and changes nothing)
    /// when no restaurant has this id.
    ///
    /// The join rows go first so the transaction holds the write lock from its first statement.
    pub async fn delete_cascade(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let detached = RestaurantPizzaRepo::delete_by_restaurant(&mut *tx, id).await?;
        let deleted = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }
        tx.commit().await?;
        tracing::info!(restaurant_id = id, restaurant_pizzas = detached, "restaurant deleted");
        Ok(true)
    }
}
