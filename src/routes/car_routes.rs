use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::dto::common_dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;
use crate::utils::pagination::{Paginated, PaginationQuery};

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route(
            "/cars/:id",
            get(get_car).put(update_car).patch(update_car).delete(delete_car),
        )
}

async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Paginated<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list(query.resolve()).await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateCarRequest>,
) -> Result<(StatusCode, Json<CarResponse>), AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateCarRequest>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
