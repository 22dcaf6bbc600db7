//! Create handler for the join entity.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::serializer::RestaurantPizzaView;
use crate::service::{RequestValidator, RestaurantPizzaRepo};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// POST /restaurant_pizzas
///
/// Every failure, including a database error during the write, is answered with the same 400
/// validation body.
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::restaurant_pizza(&body)?;
    let created = RestaurantPizzaRepo::create(&state.pool, &input)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, ?input, "restaurant_pizza insert failed");
            AppError::Validation(format!("insert failed: {}", e))
        })?
        .ok_or_else(|| AppError::Validation("restaurant or pizza does not exist".into()))?;
    Ok((StatusCode::CREATED, Json(RestaurantPizzaView::from(&created))))
}
