//! Repositorio de Client

use sqlx::PgPool;

use crate::models::client::{Client, NewClient};
use crate::utils::errors::AppResult;
use crate::utils::pagination::Pagination;

const CLIENT_COLUMNS: &str = "client_id, login, email, number, status";

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<(Vec<Client>, i64)> {
        let clients = sqlx::query_as::<_, Client>(&format!(
            "SELECT {} FROM clients ORDER BY client_id LIMIT $1 OFFSET $2",
            CLIENT_COLUMNS
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;

        Ok((clients, total.0))
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {} FROM clients WHERE client_id = $1",
            CLIENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// Comprueba si el email ya pertenece a otro cliente distinto de `except_id`
    pub async fn email_taken(&self, email: &str, except_id: Option<i32>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE email = $1 AND client_id IS DISTINCT FROM $2)",
        )
        .bind(email)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn create(&self, client: &NewClient) -> AppResult<Client> {
        let created = sqlx::query_as::<_, Client>(&format!(
            r#"
            INSERT INTO clients (login, email, number, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            CLIENT_COLUMNS
        ))
        .bind(&client.login)
        .bind(&client.email)
        .bind(&client.number)
        .bind(&client.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update(&self, client: &Client) -> AppResult<Client> {
        let updated = sqlx::query_as::<_, Client>(&format!(
            r#"
            UPDATE clients
            SET login = $2, email = $3, number = $4, status = $5
            WHERE client_id = $1
            RETURNING {}
            "#,
            CLIENT_COLUMNS
        ))
        .bind(client.client_id)
        .bind(&client.login)
        .bind(&client.email)
        .bind(&client.number)
        .bind(&client.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE client_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
