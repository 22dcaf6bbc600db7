//! Pizza API: restaurants, pizzas and priced restaurant/pizza pairings over HTTP, backed by SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod seed;
pub mod serializer;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes};
pub use seed::seed_sample_data;
pub use service::{PizzaRepo, RestaurantPizzaRepo, RestaurantRepo};
pub use state::AppState;
pub use store::connect;
