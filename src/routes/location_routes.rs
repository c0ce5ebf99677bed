use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::location_controller::LocationController;
use crate::models::location::Location;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas protegidas por API key
pub fn create_location_router() -> Router<AppState> {
    Router::new().route("/locations/id/:id", get(get_location))
}

/// Rutas sin API key
pub fn create_location_public_router() -> Router<AppState> {
    Router::new().route("/locations", get(list_locations))
}

async fn list_locations(State(state): State<AppState>) -> Result<Json<Vec<Location>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Location>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}
