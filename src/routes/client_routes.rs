use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::client_controller::ClientController;
use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::dto::common_dto::MessageResponse;
use crate::routes::with_rate_limit;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;
use crate::utils::pagination::{Paginated, PaginationQuery};

pub fn create_client_router(state: &AppState) -> Router<AppState> {
    let limits = &state.rate_limits;

    Router::new()
        .route(
            "/clients",
            with_rate_limit(get(list_clients), &limits.standard)
                .merge(with_rate_limit(post(create_client), &limits.strict)),
        )
        .route(
            "/clients/:id",
            get(get_client)
                .merge(with_rate_limit(
                    put(update_client).patch(update_client),
                    &limits.standard,
                ))
                .merge(with_rate_limit(delete(delete_client), &limits.strict)),
        )
}

async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Paginated<ClientResponse>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.list(query.resolve()).await?;
    Ok(Json(response))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}

async fn create_client(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
