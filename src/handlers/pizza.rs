//! Pizza handlers: list.

use crate::error::AppError;
use crate::serializer::PizzaView;
use crate::service::PizzaRepo;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// GET /pizzas
pub async fn list_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = PizzaRepo::list(&state.pool).await?;
    let data: Vec<PizzaView> = rows.iter().map(PizzaView::from).collect();
    Ok((StatusCode::OK, Json(data)))
}
