//! Repositorio de lectura y borrado de AutoUsa
//!
//! Las escrituras que tocan el historial pasan por
//! [`PgAutoUsaUnitOfWork`](crate::repositories::unit_of_work::PgAutoUsaUnitOfWork).

use sqlx::{PgConnection, PgPool};

use crate::models::autousa::{AutoUsaView, HistoryStayRow};
use crate::repositories::unit_of_work::AutoUsaKey;
use crate::utils::errors::AppResult;
use crate::utils::pagination::Pagination;

const VIEW_SELECT: &str = r#"
    SELECT a.id, a.vin, a.container_number, a.mark, a.model,
           a.loc_now_id, a.loc_next_id, a.arrival_date, a.departure_date,
           ln.location_id AS loc_now_location_id,
           ln.country AS loc_now_country,
           ln.description AS loc_now_description,
           lx.location_id AS loc_next_location_id,
           lx.country AS loc_next_country,
           lx.description AS loc_next_description
    FROM autousa a
    LEFT JOIN locations ln ON ln.location_id = a.loc_now_id
    LEFT JOIN locations lx ON lx.location_id = a.loc_next_id
"#;

pub struct AutoUsaRepository {
    pool: PgPool,
}

impl AutoUsaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, pagination: &Pagination) -> AppResult<(Vec<AutoUsaView>, i64)> {
        let autos = sqlx::query_as::<_, AutoUsaView>(&format!(
            "{} ORDER BY a.id LIMIT $1 OFFSET $2",
            VIEW_SELECT
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM autousa")
            .fetch_one(&self.pool)
            .await?;

        Ok((autos, total.0))
    }

    pub async fn find_view(&self, key: &AutoUsaKey) -> AppResult<Option<AutoUsaView>> {
        let mut conn = self.pool.acquire().await?;
        fetch_view(&mut conn, key).await
    }

    pub async fn exists_by_vin(&self, vin: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM autousa WHERE vin = $1)")
                .bind(vin)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Vehículo y filas archivadas leídos desde una única instantánea
    pub async fn history_snapshot(
        &self,
        key: &AutoUsaKey,
    ) -> AppResult<Option<(AutoUsaView, Vec<HistoryStayRow>)>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let Some(view) = fetch_view(&mut tx, key).await? else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, HistoryStayRow>(
            r#"
            SELECT h.loc_id, h.arrival_date, h.departure_date,
                   l.location_id, l.country, l.description
            FROM autousa_history h
            LEFT JOIN locations l ON l.location_id = h.loc_id
            WHERE h.autousa_id = $1
            ORDER BY h.id
            "#,
        )
        .bind(view.auto.id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some((view, rows)))
    }

    /// Borra el vehículo y su historial; devuelve el VIN borrado
    pub async fn delete(&self, key: &AutoUsaKey) -> AppResult<Option<String>> {
        let mut tx = self.pool.begin().await?;

        let target: Option<(i32, String)> = match key {
            AutoUsaKey::Id(id) => {
                sqlx::query_as("SELECT id, vin FROM autousa WHERE id = $1 FOR UPDATE")
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await?
            }
            AutoUsaKey::Vin(vin) => {
                sqlx::query_as("SELECT id, vin FROM autousa WHERE vin = $1 FOR UPDATE")
                    .bind(vin)
                    .fetch_optional(&mut *tx)
                    .await?
            }
        };

        let Some((id, vin)) = target else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM autousa_history WHERE autousa_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM autousa WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(vin))
    }
}

async fn fetch_view(conn: &mut PgConnection, key: &AutoUsaKey) -> AppResult<Option<AutoUsaView>> {
    let view = match key {
        AutoUsaKey::Id(id) => {
            sqlx::query_as::<_, AutoUsaView>(&format!("{} WHERE a.id = $1", VIEW_SELECT))
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?
        }
        AutoUsaKey::Vin(vin) => {
            sqlx::query_as::<_, AutoUsaView>(&format!("{} WHERE a.vin = $1", VIEW_SELECT))
                .bind(vin)
                .fetch_optional(&mut *conn)
                .await?
        }
    };

    Ok(view)
}
