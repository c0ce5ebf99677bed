use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::autousa_controller::AutoUsaController;
use crate::dto::autousa_dto::{AutoUsaRequest, AutoUsaResponse, PhotosResponse};
use crate::dto::common_dto::MessageResponse;
use crate::repositories::unit_of_work::AutoUsaKey;
use crate::routes::with_rate_limit;
use crate::services::location_history_service::StayRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;
use crate::utils::pagination::{Paginated, PaginationQuery};

/// Rutas protegidas por API key
pub fn create_autousa_router(state: &AppState) -> Router<AppState> {
    let limits = &state.rate_limits;

    Router::new()
        .route("/autousa", with_rate_limit(get(list_autos), &limits.standard).merge(post(create_auto)))
        .route(
            "/autousa/id/:id",
            get(get_auto_by_id)
                .put(update_auto_by_id)
                .patch(update_auto_by_id)
                .delete(delete_auto_by_id),
        )
        .route("/autousa/id/:id/history", get(history_by_id))
        .route(
            "/autousa/vin/:vin",
            get(get_auto_by_vin)
                .put(upsert_auto_by_vin)
                .patch(upsert_auto_by_vin)
                .delete(delete_auto_by_vin),
        )
        .route("/autousa/vin/:vin/history", get(history_by_vin))
        .route(
            "/autousa/:vin/upload",
            with_rate_limit(post(upload_photos), &limits.upload)
                .layer(DefaultBodyLimit::max(state.config.max_upload_bytes)),
        )
}

/// Rutas sin API key
pub fn create_autousa_public_router() -> Router<AppState> {
    Router::new().route("/autousa/:vin/photos", get(list_photos))
}

fn controller(state: &AppState) -> AutoUsaController {
    AutoUsaController::new(state.pool.clone(), state.photos.clone())
}

async fn list_autos(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Paginated<AutoUsaResponse>>, AppError> {
    let response = controller(&state).list(query.resolve()).await?;
    Ok(Json(response))
}

async fn create_auto(
    State(state): State<AppState>,
    AppJson(request): AppJson<AutoUsaRequest>,
) -> Result<(StatusCode, Json<AutoUsaResponse>), AppError> {
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_auto_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AutoUsaResponse>, AppError> {
    let response = controller(&state).get(&AutoUsaKey::Id(id)).await?;
    Ok(Json(response))
}

async fn update_auto_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(request): AppJson<AutoUsaRequest>,
) -> Result<Json<AutoUsaResponse>, AppError> {
    let response = controller(&state).update(&AutoUsaKey::Id(id), request).await?;
    Ok(Json(response))
}

async fn delete_auto_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = controller(&state).delete(&AutoUsaKey::Id(id)).await?;
    Ok(Json(response))
}

async fn history_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<StayRecord>>, AppError> {
    let response = controller(&state).history(&AutoUsaKey::Id(id)).await?;
    Ok(Json(response))
}

async fn get_auto_by_vin(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<AutoUsaResponse>, AppError> {
    let key = AutoUsaController::vin_key(&vin)?;
    let response = controller(&state).get(&key).await?;
    Ok(Json(response))
}

async fn upsert_auto_by_vin(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    AppJson(request): AppJson<AutoUsaRequest>,
) -> Result<(StatusCode, Json<AutoUsaResponse>), AppError> {
    let (created, response) = controller(&state).upsert(&vin, request).await?;
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(response)))
}

async fn delete_auto_by_vin(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let key = AutoUsaController::vin_key(&vin)?;
    let response = controller(&state).delete(&key).await?;
    Ok(Json(response))
}

async fn history_by_vin(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<Vec<StayRecord>>, AppError> {
    let key = AutoUsaController::vin_key(&vin)?;
    let response = controller(&state).history(&key).await?;
    Ok(Json(response))
}

async fn upload_photos(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?;
        upload = Some((file_name, bytes.to_vec()));
        break;
    }

    let response = controller(&state).upload_photos(&vin, upload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_photos(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<PhotosResponse>, AppError> {
    let response = controller(&state).photos(&vin).await?;
    Ok(Json(response))
}
