use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::service_controller::ServiceController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::routes::with_rate_limit;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;
use crate::utils::pagination::{Paginated, PaginationQuery};

pub fn create_service_router(state: &AppState) -> Router<AppState> {
    let limits = &state.rate_limits;

    Router::new()
        .route(
            "/services",
            with_rate_limit(get(list_services), &limits.standard)
                .merge(with_rate_limit(post(create_service), &limits.strict)),
        )
        .route(
            "/services/:id",
            get(get_service)
                .merge(with_rate_limit(
                    put(update_service).patch(update_service),
                    &limits.standard,
                ))
                .merge(with_rate_limit(delete(delete_service), &limits.strict)),
        )
}

fn controller(state: &AppState) -> ServiceController {
    ServiceController::new(state.pool.clone(), state.config.base_url.clone())
}

async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Paginated<ServiceResponse>>, AppError> {
    let response = controller(&state).list(query.resolve()).await?;
    Ok(Json(response))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceResponse>, AppError> {
    let response = controller(&state).get(id).await?;
    Ok(Json(response))
}

async fn create_service(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), AppError> {
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateServiceRequest>,
) -> Result<Json<ServiceResponse>, AppError> {
    let response = controller(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = controller(&state).delete(id).await?;
    Ok(Json(response))
}
