//! Request body validation for new join rows.

use crate::error::AppError;
use crate::models::{DbId, NewRestaurantPizza};
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Check a create body before anything touches the store.
    ///
    /// `price` only has to be present and numeric, so 0 is accepted. The ids must be truthy:
    /// a missing, null or zero id is rejected.
    pub fn restaurant_pizza(body: &Value) -> Result<NewRestaurantPizza, AppError> {
        let Value::Object(fields) = body else {
            return Err(AppError::Validation("body must be a JSON object".into()));
        };
        let price = match fields.get("price") {
            None | Some(Value::Null) => return Err(AppError::Validation("price is required".into())),
            Some(v) => v
                .as_f64()
                .ok_or_else(|| AppError::Validation("price must be a number".into()))?,
        };
        Ok(NewRestaurantPizza {
            price,
            restaurant_id: truthy_id(fields.get("restaurant_id"), "restaurant_id")?,
            pizza_id: truthy_id(fields.get("pizza_id"), "pizza_id")?,
        })
    }
}

/// Only JSON integers count; `"1"`, `true` and `1.0` are rejected on purpose.
fn truthy_id(value: Option<&Value>, field: &str) -> Result<DbId, AppError> {
    match value.and_then(Value::as_i64) {
        Some(id) if id != 0 => Ok(id),
        Some(_) => Err(AppError::Validation(format!("{field} must not be 0"))),
        None => Err(AppError::Validation(format!("{field} must be a non-zero integer"))),
    }
}
