use sqlx::PgPool;
use tracing::info;

use crate::dto::common_dto::MessageResponse;
use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::repositories::service_repository::ServiceRepository;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::pagination::{Paginated, Pagination};

pub struct ServiceController {
    repository: ServiceRepository,
    base_url: String,
}

impl ServiceController {
    pub fn new(pool: PgPool, base_url: String) -> Self {
        Self {
            repository: ServiceRepository::new(pool),
            base_url,
        }
    }

    pub async fn list(&self, pagination: Pagination) -> AppResult<Paginated<ServiceResponse>> {
        let (services, total) = self.repository.list(&pagination).await?;
        let data = services
            .into_iter()
            .map(|s| ServiceResponse::from_service(s, &self.base_url))
            .collect();
        Ok(Paginated::new(data, pagination, total))
    }

    pub async fn get(&self, id: i32) -> AppResult<ServiceResponse> {
        let service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service"))?;

        Ok(ServiceResponse::from_service(service, &self.base_url))
    }

    pub async fn create(&self, request: CreateServiceRequest) -> AppResult<ServiceResponse> {
        let new_service = request.into_new_service()?;
        let service = self.repository.create(&new_service).await?;
        info!("✅ Service creado: {}", service.service_id);

        Ok(ServiceResponse::from_service(service, &self.base_url))
    }

    pub async fn update(&self, id: i32, request: UpdateServiceRequest) -> AppResult<ServiceResponse> {
        let mut service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service"))?;

        request.apply_to(&mut service)?;
        let service = self.repository.update(&service).await?;
        info!("✅ Service actualizado: {}", id);

        Ok(ServiceResponse::from_service(service, &self.base_url))
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Service"));
        }
        info!("🗑️ Service eliminado: {}", id);

        Ok(MessageResponse::new("Service deleted successfully"))
    }
}
