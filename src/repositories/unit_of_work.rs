//! Unidad de trabajo de AutoUsa
//!
//! Agrupa la lectura del vehículo, el archivado en `autousa_history` y la
//! actualización de `autousa` en una sola transacción. `commit` consume la
//! unidad; si se descarta sin confirmar, la transacción se revierte.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::autousa::{AutoUsa, NewAutoUsa, NewHistoryEntry};
use crate::utils::errors::AppResult;

/// Identidad de un AutoUsa en las rutas: id interno o VIN
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoUsaKey {
    Id(i32),
    Vin(String),
}

#[async_trait]
pub trait AutoUsaUnitOfWork: Send + Sized {
    /// Lee el vehículo bloqueando su fila hasta el final de la unidad
    async fn find_for_update(&mut self, key: &AutoUsaKey) -> AppResult<Option<AutoUsa>>;

    async fn vin_exists(&mut self, vin: &str) -> AppResult<bool>;

    async fn insert_auto(&mut self, auto: &NewAutoUsa) -> AppResult<AutoUsa>;

    async fn append_history(&mut self, entry: &NewHistoryEntry) -> AppResult<()>;

    async fn save_auto(&mut self, auto: &AutoUsa) -> AppResult<AutoUsa>;

    async fn commit(self) -> AppResult<()>;
}

pub(crate) const AUTOUSA_COLUMNS: &str =
    "id, vin, container_number, mark, model, loc_now_id, loc_next_id, arrival_date, departure_date";

/// Implementación sobre una transacción de PostgreSQL
pub struct PgAutoUsaUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl PgAutoUsaUnitOfWork {
    pub async fn begin(pool: &PgPool) -> AppResult<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }
}

#[async_trait]
impl AutoUsaUnitOfWork for PgAutoUsaUnitOfWork {
    async fn find_for_update(&mut self, key: &AutoUsaKey) -> AppResult<Option<AutoUsa>> {
        let auto = match key {
            AutoUsaKey::Id(id) => {
                sqlx::query_as::<_, AutoUsa>(&format!(
                    "SELECT {} FROM autousa WHERE id = $1 FOR UPDATE",
                    AUTOUSA_COLUMNS
                ))
                .bind(id)
                .fetch_optional(&mut *self.tx)
                .await?
            }
            AutoUsaKey::Vin(vin) => {
                sqlx::query_as::<_, AutoUsa>(&format!(
                    "SELECT {} FROM autousa WHERE vin = $1 FOR UPDATE",
                    AUTOUSA_COLUMNS
                ))
                .bind(vin)
                .fetch_optional(&mut *self.tx)
                .await?
            }
        };

        Ok(auto)
    }

    async fn vin_exists(&mut self, vin: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM autousa WHERE vin = $1)")
                .bind(vin)
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(result.0)
    }

    async fn insert_auto(&mut self, auto: &NewAutoUsa) -> AppResult<AutoUsa> {
        let created = sqlx::query_as::<_, AutoUsa>(&format!(
            r#"
            INSERT INTO autousa (vin, container_number, mark, model, loc_now_id, loc_next_id, arrival_date, departure_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            AUTOUSA_COLUMNS
        ))
        .bind(&auto.vin)
        .bind(&auto.container_number)
        .bind(&auto.mark)
        .bind(&auto.model)
        .bind(auto.loc_now_id)
        .bind(auto.loc_next_id)
        .bind(auto.arrival_date)
        .bind(auto.departure_date)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(created)
    }

    async fn append_history(&mut self, entry: &NewHistoryEntry) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO autousa_history (autousa_id, loc_id, arrival_date, departure_date)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.autousa_id)
        .bind(entry.loc_id)
        .bind(entry.arrival_date)
        .bind(entry.departure_date)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn save_auto(&mut self, auto: &AutoUsa) -> AppResult<AutoUsa> {
        let saved = sqlx::query_as::<_, AutoUsa>(&format!(
            r#"
            UPDATE autousa
            SET vin = $2, container_number = $3, mark = $4, model = $5,
                loc_now_id = $6, loc_next_id = $7, arrival_date = $8, departure_date = $9
            WHERE id = $1
            RETURNING {}
            "#,
            AUTOUSA_COLUMNS
        ))
        .bind(auto.id)
        .bind(&auto.vin)
        .bind(&auto.container_number)
        .bind(&auto.mark)
        .bind(&auto.model)
        .bind(auto.loc_now_id)
        .bind(auto.loc_next_id)
        .bind(auto.arrival_date)
        .bind(auto.departure_date)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(saved)
    }

    async fn commit(self) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
