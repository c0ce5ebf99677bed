//! Controlador de AutoUsa
//!
//! Coordina validación de VIN, la unidad de trabajo del historial y el
//! almacenamiento de fotos.

use sqlx::PgPool;
use tracing::info;

use crate::dto::autousa_dto::{AutoUsaRequest, AutoUsaResponse, PhotosResponse};
use crate::dto::common_dto::MessageResponse;
use crate::repositories::autousa_repository::AutoUsaRepository;
use crate::repositories::unit_of_work::{AutoUsaKey, PgAutoUsaUnitOfWork};
use crate::services::location_history_service::{
    self, reconstruct_history, StayRecord, UpsertOutcome,
};
use crate::services::photo_storage::PhotoStorage;
use crate::utils::errors::{bad_request_error, not_found_error, AppError, AppResult};
use crate::utils::pagination::{Paginated, Pagination};
use crate::utils::validation::require_valid_vin;

pub struct AutoUsaController {
    pool: PgPool,
    repository: AutoUsaRepository,
    photos: PhotoStorage,
}

impl AutoUsaController {
    pub fn new(pool: PgPool, photos: PhotoStorage) -> Self {
        Self {
            repository: AutoUsaRepository::new(pool.clone()),
            pool,
            photos,
        }
    }

    /// Valida el VIN de la ruta antes de usarlo como clave
    pub fn vin_key(vin: &str) -> AppResult<AutoUsaKey> {
        require_valid_vin(vin)?;
        Ok(AutoUsaKey::Vin(vin.to_string()))
    }

    pub async fn list(&self, pagination: Pagination) -> AppResult<Paginated<AutoUsaResponse>> {
        let (autos, total) = self.repository.list(&pagination).await?;
        let data = autos.into_iter().map(AutoUsaResponse::from).collect();
        Ok(Paginated::new(data, pagination, total))
    }

    pub async fn get(&self, key: &AutoUsaKey) -> AppResult<AutoUsaResponse> {
        self.repository
            .find_view(key)
            .await?
            .map(AutoUsaResponse::from)
            .ok_or_else(|| not_found_error("Auto"))
    }

    pub async fn create(&self, request: AutoUsaRequest) -> AppResult<AutoUsaResponse> {
        let update = request.into_update();
        let vin = update
            .vin
            .clone()
            .ok_or_else(|| bad_request_error("Invalid JSON or missing VIN"))?;
        require_valid_vin(&vin)?;

        let uow = PgAutoUsaUnitOfWork::begin(&self.pool).await?;
        let created = location_history_service::create(uow, &vin, update).await?;

        self.get(&AutoUsaKey::Id(created.id)).await
    }

    pub async fn update(
        &self,
        key: &AutoUsaKey,
        request: AutoUsaRequest,
    ) -> AppResult<AutoUsaResponse> {
        let uow = PgAutoUsaUnitOfWork::begin(&self.pool).await?;
        let saved = location_history_service::apply_update(uow, key, request.into_update()).await?;

        self.get(&AutoUsaKey::Id(saved.id)).await
    }

    /// Devuelve `true` si el vehículo se creó
    pub async fn upsert(
        &self,
        vin: &str,
        request: AutoUsaRequest,
    ) -> AppResult<(bool, AutoUsaResponse)> {
        require_valid_vin(vin)?;

        let uow = PgAutoUsaUnitOfWork::begin(&self.pool).await?;
        let (created, auto) =
            match location_history_service::upsert_by_vin(uow, vin, request.into_update()).await? {
                UpsertOutcome::Created(auto) => (true, auto),
                UpsertOutcome::Updated(auto) => (false, auto),
            };

        let response = self.get(&AutoUsaKey::Id(auto.id)).await?;
        Ok((created, response))
    }

    pub async fn delete(&self, key: &AutoUsaKey) -> AppResult<MessageResponse> {
        let vin = self
            .repository
            .delete(key)
            .await?
            .ok_or_else(|| not_found_error("Auto"))?;

        info!("🗑️ Auto eliminado (VIN: {})", vin);
        self.photos.remove_photos(&vin).await;

        Ok(MessageResponse::new("Auto deleted successfully"))
    }

    pub async fn history(&self, key: &AutoUsaKey) -> AppResult<Vec<StayRecord>> {
        let (view, rows) = self
            .repository
            .history_snapshot(key)
            .await?
            .ok_or_else(|| not_found_error("Auto"))?;

        Ok(reconstruct_history(&view, &rows))
    }

    /// `upload` es el campo multipart `file` (nombre y contenido), si vino
    pub async fn upload_photos(
        &self,
        vin: &str,
        upload: Option<(String, Vec<u8>)>,
    ) -> AppResult<MessageResponse> {
        require_valid_vin(vin)?;
        if !self.repository.exists_by_vin(vin).await? {
            return Err(not_found_error("Auto"));
        }
        let (file_name, archive) = upload.ok_or_else(|| bad_request_error("No file uploaded"))?;
        if !file_name.ends_with(".zip") {
            return Err(bad_request_error("File must be a .zip"));
        }

        self.photos.extract_zip(vin, archive).await?;

        Ok(MessageResponse::new(format!(
            "Photos uploaded successfully for VIN {}",
            vin
        )))
    }

    pub async fn photos(&self, vin: &str) -> AppResult<PhotosResponse> {
        require_valid_vin(vin)?;

        let photos = self
            .photos
            .list_photos(vin)
            .await?
            .ok_or_else(|| AppError::NotFound("No photos found for this VIN".to_string()))?;

        Ok(PhotosResponse {
            vin: vin.to_string(),
            photos,
        })
    }
}
