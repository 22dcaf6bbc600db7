//! Row types for the three tables plus the composite results the repositories return.

use chrono::NaiveDateTime;
use sqlx::FromRow;

pub type DbId = i64;

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct Restaurant {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct Pizza {
    pub id: DbId,
    pub name: String,
    pub ingredients: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct RestaurantPizza {
    pub id: DbId,
    pub price: f64,
    pub restaurant_id: DbId,
    pub pizza_id: DbId,
    pub created_at: NaiveDateTime,
}

/// Validated input for a new join row.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRestaurantPizza {
    pub price: f64,
    pub restaurant_id: DbId,
    pub pizza_id: DbId,
}

/// A join row with the pizza it points at.
#[derive(Clone, Debug)]
pub struct MenuItem {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}

/// A restaurant and its join rows, read in one transaction.
#[derive(Clone, Debug)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub items: Vec<MenuItem>,
}

/// A freshly committed join row with both ends loaded.
#[derive(Clone, Debug)]
pub struct CreatedRestaurantPizza {
    pub restaurant_pizza: RestaurantPizza,
    pub restaurant: Restaurant,
    pub pizza: Pizza,
}
