use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::dto::common_dto::MessageResponse;
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::pagination::{Paginated, Pagination};

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn list(&self, pagination: Pagination) -> AppResult<Paginated<ClientResponse>> {
        let (clients, total) = self.repository.list(&pagination).await?;
        let data = clients.into_iter().map(ClientResponse::from).collect();
        Ok(Paginated::new(data, pagination, total))
    }

    pub async fn get(&self, id: i32) -> AppResult<ClientResponse> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ClientResponse::from)
            .ok_or_else(|| not_found_error("Client"))
    }

    pub async fn create(&self, request: CreateClientRequest) -> AppResult<ClientResponse> {
        request.validate()?;
        let new_client = request.into_new_client()?;

        if self.repository.email_taken(&new_client.email, None).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let client = self.repository.create(&new_client).await?;
        info!("✅ Client creado: {}", client.client_id);

        Ok(ClientResponse::from(client))
    }

    pub async fn update(&self, id: i32, request: UpdateClientRequest) -> AppResult<ClientResponse> {
        request.validate()?;

        let mut client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client"))?;

        let email = request.email()?;
        if let Some(email) = email.as_deref() {
            if email != client.email && self.repository.email_taken(email, Some(id)).await? {
                return Err(AppError::Conflict("Email already exists".to_string()));
            }
        }

        request.apply_to(&mut client, email);
        let client = self.repository.update(&client).await?;
        info!("✅ Client actualizado: {}", id);

        Ok(ClientResponse::from(client))
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Client"));
        }
        info!("🗑️ Client eliminado: {}", id);

        Ok(MessageResponse::new("Client deleted successfully"))
    }
}
