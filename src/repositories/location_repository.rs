//! Repositorio de Location (solo lectura)

use sqlx::PgPool;

use crate::models::location::Location;
use crate::utils::errors::AppResult;

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT location_id, country, description FROM locations ORDER BY location_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Location>> {
        let location = sqlx::query_as::<_, Location>(
            "SELECT location_id, country, description FROM locations WHERE location_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }
}
