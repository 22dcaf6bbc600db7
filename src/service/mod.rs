//! Repositories over the three tables, plus request validation.

mod pizza;
mod restaurant;
mod restaurant_pizza;
mod validation;
pub use pizza::PizzaRepo;
pub use restaurant::RestaurantRepo;
pub use restaurant_pizza::RestaurantPizzaRepo;
pub use validation::RequestValidator;
