//! Restaurant handlers: list, read with menu, cascading delete.

use crate::error::AppError;
use crate::models::DbId;
use crate::serializer::{RestaurantDetailView, RestaurantView};
use crate::service::RestaurantRepo;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

const RESTAURANT: &str = "Restaurant";

/// GET /restaurants
pub async fn list_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = RestaurantRepo::list(&state.pool).await?;
    let data: Vec<RestaurantView> = rows.iter().map(RestaurantView::from).collect();
    Ok((StatusCode::OK, Json(data)))
}

/// GET /restaurants/:id
pub async fn read_restaurant(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> Result<impl IntoResponse, AppError> {
    let menu = RestaurantRepo::find_menu(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(RESTAURANT))?;
    Ok((StatusCode::OK, Json(RestaurantDetailView::from(&menu))))
}

/// DELETE /restaurants/:id. Join rows go in the same transaction.
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> Result<impl IntoResponse, AppError> {
    if !RestaurantRepo::delete_cascade(&state.pool, id).await? {
        return Err(AppError::NotFound(RESTAURANT));
    }
    Ok(StatusCode::NO_CONTENT)
}
