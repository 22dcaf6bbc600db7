//! Sample data for local runs and tests. Restaurants and pizzas have no create endpoint, so
//! this is how they get into the database.

use crate::models::NewRestaurantPizza;
use crate::service::{PizzaRepo, RestaurantPizzaRepo, RestaurantRepo};
use sqlx::SqlitePool;

pub const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

pub const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price) into the two lists above.
const PAIRINGS: &[(usize, usize, f64)] = &[(0, 0, 1.0), (1, 1, 4.0), (2, 2, 5.0)];

#[derive(Debug, Default, PartialEq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replace the contents of all three tables with the sample data, atomically.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    for table in ["restaurant_pizzas", "restaurants", "pizzas"] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurant_ids.push(RestaurantRepo::create(&mut *tx, name, address).await?.id);
    }
    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizza_ids.push(PizzaRepo::create(&mut *tx, name, ingredients).await?.id);
    }
    for &(r, p, price) in PAIRINGS {
        let input = NewRestaurantPizza {
            price,
            restaurant_id: restaurant_ids[r],
            pizza_id: pizza_ids[p],
        };
        RestaurantPizzaRepo::insert(&mut *tx, &input).await?;
    }
    tx.commit().await?;

    let summary = SeedSummary {
        restaurants: restaurant_ids.len(),
        pizzas: pizza_ids.len(),
        restaurant_pizzas: PAIRINGS.len(),
    };
    tracing::info!(?summary, "seeded sample data");
    Ok(summary)
}
