//! Repositorio de Service

use sqlx::PgPool;

use crate::models::service::{NewService, Service};
use crate::utils::errors::AppResult;
use crate::utils::pagination::Pagination;

const SERVICE_COLUMNS: &str = "service_id, name, descr, price, currency, photo_filename";

pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<(Vec<Service>, i64)> {
        let services = sqlx::query_as::<_, Service>(&format!(
            "SELECT {} FROM services ORDER BY service_id LIMIT $1 OFFSET $2",
            SERVICE_COLUMNS
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await?;

        Ok((services, total.0))
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>> {
        let service = sqlx::query_as::<_, Service>(&format!(
            "SELECT {} FROM services WHERE service_id = $1",
            SERVICE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn create(&self, service: &NewService) -> AppResult<Service> {
        let created = sqlx::query_as::<_, Service>(&format!(
            r#"
            INSERT INTO services (name, descr, price, currency, photo_filename)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        ))
        .bind(&service.name)
        .bind(&service.descr)
        .bind(service.price)
        .bind(&service.currency)
        .bind(&service.photo_filename)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update(&self, service: &Service) -> AppResult<Service> {
        let updated = sqlx::query_as::<_, Service>(&format!(
            r#"
            UPDATE services
            SET name = $2, descr = $3, price = $4, currency = $5, photo_filename = $6
            WHERE service_id = $1
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        ))
        .bind(service.service_id)
        .bind(&service.name)
        .bind(&service.descr)
        .bind(service.price)
        .bind(&service.currency)
        .bind(&service.photo_filename)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Devuelve `false` si no existía
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM services WHERE service_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
