use sqlx::PgPool;

use crate::models::location::Location;
use crate::repositories::location_repository::LocationRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct LocationController {
    repository: LocationRepository,
}

impl LocationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LocationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Location>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Location> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Location"))
    }
}
