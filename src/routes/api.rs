//! Resource routes. Path ids are parsed as integers by the router.

use crate::handlers::{
    create_restaurant_pizza, delete_restaurant, list_pizzas, list_restaurants, read_restaurant,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id", get(read_restaurant).delete(delete_restaurant))
        .route("/pizzas", get(list_pizzas))
        .route("/restaurant_pizzas", post(create_restaurant_pizza))
        .with_state(state)
}
