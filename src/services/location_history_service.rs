//! Seguimiento del historial de localizaciones de AutoUsa
//!
//! Escritura: cuando cambia la localización actual de un vehículo, la estancia
//! anterior (localización y fechas) se archiva en `autousa_history` antes de
//! actualizar el vehículo, todo dentro de una [`AutoUsaUnitOfWork`].
//!
//! Lectura: el historial se reconstruye a partir de las filas archivadas más
//! la estancia actual, ordenado de forma estable por fecha de llegada.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::autousa::{AutoUsa, AutoUsaView, HistoryStayRow, NewAutoUsa, NewHistoryEntry};
use crate::models::location::label_of;
use crate::repositories::unit_of_work::{AutoUsaKey, AutoUsaUnitOfWork};
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::{require_valid_vin, DATE_FORMAT};

/// Orden de las estancias sin fecha de llegada: siempre al final
const MISSING_ARRIVAL_SORT_KEY: &str = "9999-12-31";

/// Campos modificables de un AutoUsa. `None` significa "no enviado".
///
/// `loc_next_id` distingue entre ausente (`None`) y enviado como null
/// (`Some(None)`), que borra la siguiente localización.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoUsaUpdate {
    pub vin: Option<String>,
    pub container_number: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub loc_now_id: Option<i32>,
    pub loc_next_id: Option<Option<i32>>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
}

/// Cambio de la localización actual provocado por una actualización
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationTransition {
    /// Sin localización nueva, o la misma que ya tenía
    Unchanged,
    /// De sin localizar a `to`; no hay estancia que archivar
    Arrived { to: i32 },
    /// De `from` a `to`; la estancia en `from` se archiva
    Moved { from: i32, to: i32 },
}

impl LocationTransition {
    pub fn between(current: Option<i32>, requested: Option<i32>) -> Self {
        match (current, requested) {
            (_, None) => LocationTransition::Unchanged,
            (Some(from), Some(to)) if from == to => LocationTransition::Unchanged,
            (None, Some(to)) => LocationTransition::Arrived { to },
            (Some(from), Some(to)) => LocationTransition::Moved { from, to },
        }
    }

    pub fn destination(&self) -> Option<i32> {
        match self {
            LocationTransition::Unchanged => None,
            LocationTransition::Arrived { to } | LocationTransition::Moved { to, .. } => Some(*to),
        }
    }
}

/// Resultado de aplicar una actualización sobre el estado actual
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    pub transition: LocationTransition,
    /// Estancia a archivar antes de guardar `updated`
    pub archived: Option<NewHistoryEntry>,
    pub updated: AutoUsa,
}

/// Calcula el nuevo estado del vehículo y la entrada de historial a archivar
pub fn plan_update(current: &AutoUsa, update: &AutoUsaUpdate) -> UpdatePlan {
    let transition = LocationTransition::between(current.loc_now_id, update.loc_now_id);
    let mut updated = current.clone();

    let archived = match transition {
        LocationTransition::Moved { from, .. } => Some(NewHistoryEntry {
            autousa_id: current.id,
            loc_id: from,
            arrival_date: current.arrival_date,
            departure_date: current.departure_date,
        }),
        _ => None,
    };

    // Las fechas solo acompañan a un cambio de localización
    if let Some(to) = transition.destination() {
        updated.loc_now_id = Some(to);
        if let Some(arrival) = update.arrival_date {
            updated.arrival_date = Some(arrival);
        }
        if let Some(departure) = update.departure_date {
            updated.departure_date = Some(departure);
        }
    }

    if let Some(next) = update.loc_next_id {
        updated.loc_next_id = next;
    }
    if let Some(vin) = &update.vin {
        updated.vin = vin.clone();
    }
    if let Some(container_number) = &update.container_number {
        updated.container_number = Some(container_number.clone());
    }
    if let Some(mark) = &update.mark {
        updated.mark = Some(mark.clone());
    }
    if let Some(model) = &update.model {
        updated.model = Some(model.clone());
    }

    UpdatePlan {
        transition,
        archived,
        updated,
    }
}

/// Vehículo nuevo con todos los campos enviados; nunca archiva
pub fn new_auto(vin: &str, update: &AutoUsaUpdate) -> NewAutoUsa {
    NewAutoUsa {
        vin: vin.to_string(),
        container_number: update.container_number.clone(),
        mark: update.mark.clone(),
        model: update.model.clone(),
        loc_now_id: update.loc_now_id,
        loc_next_id: update.loc_next_id.flatten(),
        arrival_date: update.arrival_date,
        departure_date: update.departure_date,
    }
}

/// Resultado de un upsert por VIN
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created(AutoUsa),
    Updated(AutoUsa),
}

/// Actualiza un vehículo existente; archiva la estancia anterior si cambia de localización
pub async fn apply_update<U: AutoUsaUnitOfWork>(
    mut uow: U,
    key: &AutoUsaKey,
    update: AutoUsaUpdate,
) -> AppResult<AutoUsa> {
    let current = uow
        .find_for_update(key)
        .await?
        .ok_or_else(|| not_found_error("Auto"))?;

    if let Some(vin) = update.vin.as_deref() {
        if vin != current.vin {
            require_valid_vin(vin)?;
            if uow.vin_exists(vin).await? {
                return Err(AppError::Conflict("VIN already exists".to_string()));
            }
        }
    }

    let saved = write_plan(&mut uow, &current, &update).await?;
    uow.commit().await?;

    info!("✅ Auto actualizado: {} (VIN: {})", saved.id, saved.vin);
    Ok(saved)
}

/// Crea o actualiza por VIN. El VIN de la ruta manda sobre el del cuerpo.
pub async fn upsert_by_vin<U: AutoUsaUnitOfWork>(
    mut uow: U,
    vin: &str,
    mut update: AutoUsaUpdate,
) -> AppResult<UpsertOutcome> {
    update.vin = None;

    let outcome = match uow.find_for_update(&AutoUsaKey::Vin(vin.to_string())).await? {
        Some(current) => {
            let saved = write_plan(&mut uow, &current, &update).await?;
            UpsertOutcome::Updated(saved)
        }
        None => {
            let created = uow.insert_auto(&new_auto(vin, &update)).await?;
            UpsertOutcome::Created(created)
        }
    };

    uow.commit().await?;

    match &outcome {
        UpsertOutcome::Created(auto) => info!("✅ Auto creado por VIN: {} (id {})", vin, auto.id),
        UpsertOutcome::Updated(_) => info!("✅ Auto actualizado por VIN: {}", vin),
    }
    Ok(outcome)
}

/// Alta explícita; 409 si el VIN ya existe
pub async fn create<U: AutoUsaUnitOfWork>(
    mut uow: U,
    vin: &str,
    update: AutoUsaUpdate,
) -> AppResult<AutoUsa> {
    if uow.vin_exists(vin).await? {
        return Err(AppError::Conflict("VIN already exists".to_string()));
    }

    let created = uow.insert_auto(&new_auto(vin, &update)).await?;
    uow.commit().await?;

    info!("✅ Auto creado: {} (VIN: {})", created.id, created.vin);
    Ok(created)
}

async fn write_plan<U: AutoUsaUnitOfWork>(
    uow: &mut U,
    current: &AutoUsa,
    update: &AutoUsaUpdate,
) -> AppResult<AutoUsa> {
    let plan = plan_update(current, update);

    if let Some(entry) = &plan.archived {
        debug!(
            "Archivando estancia de auto {} en localización {}",
            entry.autousa_id, entry.loc_id
        );
        uow.append_history(entry).await?;
    }

    uow.save_auto(&plan.updated).await
}

/// Una estancia del historial tal como se devuelve en la API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayRecord {
    pub loc_id: i32,
    pub location_name: String,
    pub arrival_date: String,
    /// `null` solo para la estancia actual sin fecha de salida
    pub departure_date: Option<String>,
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Historial ordenado: filas archivadas (en orden de inserción) más la estancia actual
pub fn reconstruct_history(view: &AutoUsaView, archived: &[HistoryStayRow]) -> Vec<StayRecord> {
    let mut stays: Vec<StayRecord> = archived
        .iter()
        .map(|row| StayRecord {
            loc_id: row.loc_id,
            location_name: label_of(row.location().as_ref()),
            arrival_date: format_date(row.arrival_date),
            departure_date: Some(format_date(row.departure_date)),
        })
        .collect();

    if let Some(loc_id) = view.auto.loc_now_id {
        stays.push(StayRecord {
            loc_id,
            location_name: label_of(view.loc_now().as_ref()),
            arrival_date: format_date(view.auto.arrival_date),
            departure_date: view
                .auto
                .departure_date
                .map(|d| d.format(DATE_FORMAT).to_string()),
        });
    }

    stays.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
    stays
}

fn sort_key(stay: &StayRecord) -> &str {
    if stay.arrival_date.is_empty() {
        MISSING_ARRIVAL_SORT_KEY
    } else {
        &stay.arrival_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    const VIN: &str = "1HGBH41JXMN109186";
    const LOC_A: i32 = 1;
    const LOC_B: i32 = 2;
    const LOC_C: i32 = 3;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, DATE_FORMAT).unwrap()
    }

    #[derive(Default)]
    struct MemoryDb {
        autos: Vec<AutoUsa>,
        history: Vec<NewHistoryEntry>,
        next_id: i32,
        fail_on_commit: bool,
        fail_on_history: bool,
    }

    /// Unidad de trabajo en memoria: las escrituras solo se aplican en `commit`
    struct MemoryUnitOfWork {
        db: Arc<Mutex<MemoryDb>>,
        staged_autos: Vec<AutoUsa>,
        staged_history: Vec<NewHistoryEntry>,
    }

    impl MemoryUnitOfWork {
        fn new(db: &Arc<Mutex<MemoryDb>>) -> Self {
            Self {
                db: Arc::clone(db),
                staged_autos: Vec::new(),
                staged_history: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl AutoUsaUnitOfWork for MemoryUnitOfWork {
        async fn find_for_update(&mut self, key: &AutoUsaKey) -> AppResult<Option<AutoUsa>> {
            let db = self.db.lock().unwrap();
            Ok(db
                .autos
                .iter()
                .find(|auto| match key {
                    AutoUsaKey::Id(id) => auto.id == *id,
                    AutoUsaKey::Vin(vin) => auto.vin == *vin,
                })
                .cloned())
        }

        async fn vin_exists(&mut self, vin: &str) -> AppResult<bool> {
            let db = self.db.lock().unwrap();
            Ok(db.autos.iter().any(|auto| auto.vin == vin))
        }

        async fn insert_auto(&mut self, auto: &NewAutoUsa) -> AppResult<AutoUsa> {
            let mut db = self.db.lock().unwrap();
            db.next_id += 1;
            let created = AutoUsa {
                id: db.next_id,
                vin: auto.vin.clone(),
                container_number: auto.container_number.clone(),
                mark: auto.mark.clone(),
                model: auto.model.clone(),
                loc_now_id: auto.loc_now_id,
                loc_next_id: auto.loc_next_id,
                arrival_date: auto.arrival_date,
                departure_date: auto.departure_date,
            };
            self.staged_autos.push(created.clone());
            Ok(created)
        }

        async fn append_history(&mut self, entry: &NewHistoryEntry) -> AppResult<()> {
            if self.db.lock().unwrap().fail_on_history {
                return Err(AppError::Database(sqlx::Error::PoolTimedOut));
            }
            self.staged_history.push(entry.clone());
            Ok(())
        }

        async fn save_auto(&mut self, auto: &AutoUsa) -> AppResult<AutoUsa> {
            self.staged_autos.push(auto.clone());
            Ok(auto.clone())
        }

        async fn commit(self) -> AppResult<()> {
            let mut db = self.db.lock().unwrap();
            if db.fail_on_commit {
                return Err(AppError::Database(sqlx::Error::PoolTimedOut));
            }
            for auto in self.staged_autos {
                match db.autos.iter_mut().find(|a| a.id == auto.id) {
                    Some(existing) => *existing = auto,
                    None => db.autos.push(auto),
                }
            }
            db.history.extend(self.staged_history);
            Ok(())
        }
    }

    fn seeded_db() -> Arc<Mutex<MemoryDb>> {
        let db = MemoryDb {
            autos: vec![AutoUsa {
                id: 1,
                vin: VIN.to_string(),
                container_number: None,
                mark: Some("Honda".to_string()),
                model: Some("Civic".to_string()),
                loc_now_id: Some(LOC_A),
                loc_next_id: None,
                arrival_date: Some(date("2024-01-10")),
                departure_date: Some(date("2024-01-15")),
            }],
            next_id: 1,
            ..Default::default()
        };
        Arc::new(Mutex::new(db))
    }

    fn stored(db: &Arc<Mutex<MemoryDb>>) -> AutoUsa {
        db.lock().unwrap().autos[0].clone()
    }

    fn history_len(db: &Arc<Mutex<MemoryDb>>) -> usize {
        db.lock().unwrap().history.len()
    }

    fn view_of(auto: AutoUsa) -> AutoUsaView {
        AutoUsaView {
            loc_now_location_id: auto.loc_now_id,
            loc_now_country: Some("USA".to_string()),
            loc_now_description: Some("Savannah".to_string()),
            loc_next_location_id: None,
            loc_next_country: None,
            loc_next_description: None,
            auto,
        }
    }

    fn row(loc_id: i32, arrival: Option<&str>, departure: Option<&str>) -> HistoryStayRow {
        HistoryStayRow {
            loc_id,
            arrival_date: arrival.map(date),
            departure_date: departure.map(date),
            location_id: Some(loc_id),
            country: Some("USA".to_string()),
            description: Some(format!("Yard {}", loc_id)),
        }
    }

    #[test]
    fn test_transition_between() {
        assert_eq!(LocationTransition::between(Some(1), None), LocationTransition::Unchanged);
        assert_eq!(LocationTransition::between(Some(1), Some(1)), LocationTransition::Unchanged);
        assert_eq!(
            LocationTransition::between(None, Some(2)),
            LocationTransition::Arrived { to: 2 }
        );
        assert_eq!(
            LocationTransition::between(Some(1), Some(2)),
            LocationTransition::Moved { from: 1, to: 2 }
        );
    }

    #[test]
    fn test_plan_same_location_ignores_dates() {
        let current = stored(&seeded_db());
        let update = AutoUsaUpdate {
            loc_now_id: Some(LOC_A),
            arrival_date: Some(date("2024-03-01")),
            departure_date: Some(date("2024-03-02")),
            ..Default::default()
        };

        let plan = plan_update(&current, &update);

        assert_eq!(plan.transition, LocationTransition::Unchanged);
        assert!(plan.archived.is_none());
        assert_eq!(plan.updated, current);
    }

    #[test]
    fn test_plan_arrival_from_unlocated_never_archives() {
        let mut current = stored(&seeded_db());
        current.loc_now_id = None;
        let update = AutoUsaUpdate {
            loc_now_id: Some(LOC_B),
            ..Default::default()
        };

        let plan = plan_update(&current, &update);

        assert_eq!(plan.transition, LocationTransition::Arrived { to: LOC_B });
        assert!(plan.archived.is_none());
        assert_eq!(plan.updated.loc_now_id, Some(LOC_B));
        // Sin fechas nuevas se conservan las anteriores
        assert_eq!(plan.updated.arrival_date, current.arrival_date);
    }

    #[test]
    fn test_plan_loc_next_null_vs_absent() {
        let mut current = stored(&seeded_db());
        current.loc_next_id = Some(LOC_C);

        let absent = plan_update(&current, &AutoUsaUpdate::default());
        assert_eq!(absent.updated.loc_next_id, Some(LOC_C));

        let cleared = plan_update(
            &current,
            &AutoUsaUpdate {
                loc_next_id: Some(None),
                ..Default::default()
            },
        );
        assert_eq!(cleared.updated.loc_next_id, None);
        assert!(cleared.archived.is_none());
    }

    #[tokio::test]
    async fn test_move_archives_previous_stay() {
        let db = seeded_db();
        let update = AutoUsaUpdate {
            loc_now_id: Some(LOC_B),
            arrival_date: Some(date("2024-01-16")),
            ..Default::default()
        };

        let saved = apply_update(MemoryUnitOfWork::new(&db), &AutoUsaKey::Vin(VIN.into()), update)
            .await
            .unwrap();

        assert_eq!(saved.loc_now_id, Some(LOC_B));
        assert_eq!(saved.arrival_date, Some(date("2024-01-16")));
        let history = db.lock().unwrap().history.clone();
        assert_eq!(
            history,
            vec![NewHistoryEntry {
                autousa_id: 1,
                loc_id: LOC_A,
                arrival_date: Some(date("2024-01-10")),
                departure_date: Some(date("2024-01-15")),
            }]
        );

        // Reenviar la misma localización no archiva ni toca las fechas
        let resubmit = AutoUsaUpdate {
            loc_now_id: Some(LOC_B),
            ..Default::default()
        };
        apply_update(MemoryUnitOfWork::new(&db), &AutoUsaKey::Id(1), resubmit)
            .await
            .unwrap();

        assert_eq!(history_len(&db), 1);
        assert_eq!(stored(&db).arrival_date, Some(date("2024-01-16")));
    }

    #[tokio::test]
    async fn test_resubmitted_location_keeps_dates() {
        let db = seeded_db();
        let update = AutoUsaUpdate {
            loc_now_id: Some(LOC_A),
            arrival_date: Some(date("2025-01-01")),
            departure_date: Some(date("2025-02-01")),
            ..Default::default()
        };

        apply_update(MemoryUnitOfWork::new(&db), &AutoUsaKey::Id(1), update)
            .await
            .unwrap();

        assert_eq!(history_len(&db), 0);
        let auto = stored(&db);
        assert_eq!(auto.arrival_date, Some(date("2024-01-10")));
        assert_eq!(auto.departure_date, Some(date("2024-01-15")));
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_no_partial_write() {
        let db = seeded_db();
        db.lock().unwrap().fail_on_commit = true;
        let update = AutoUsaUpdate {
            loc_now_id: Some(LOC_B),
            ..Default::default()
        };

        let result = apply_update(MemoryUnitOfWork::new(&db), &AutoUsaKey::Id(1), update).await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert_eq!(history_len(&db), 0);
        assert_eq!(stored(&db).loc_now_id, Some(LOC_A));
    }

    #[tokio::test]
    async fn test_failed_history_insert_leaves_vehicle_untouched() {
        let db = seeded_db();
        db.lock().unwrap().fail_on_history = true;
        let update = AutoUsaUpdate {
            loc_now_id: Some(LOC_B),
            mark: Some("Acura".to_string()),
            ..Default::default()
        };

        let result = apply_update(MemoryUnitOfWork::new(&db), &AutoUsaKey::Id(1), update).await;

        assert!(result.is_err());
        let auto = stored(&db);
        assert_eq!(auto.loc_now_id, Some(LOC_A));
        assert_eq!(auto.mark.as_deref(), Some("Honda"));
    }

    #[tokio::test]
    async fn test_update_missing_vehicle_is_not_found() {
        let db = seeded_db();
        let result = apply_update(
            MemoryUnitOfWork::new(&db),
            &AutoUsaKey::Id(42),
            AutoUsaUpdate::default(),
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_vin_rename_conflict_and_format() {
        let db = seeded_db();
        db.lock().unwrap().autos.push(AutoUsa {
            id: 2,
            vin: "5YJ3E1EA7KF317000".to_string(),
            container_number: None,
            mark: None,
            model: None,
            loc_now_id: None,
            loc_next_id: None,
            arrival_date: None,
            departure_date: None,
        });

        let taken = AutoUsaUpdate {
            vin: Some("5YJ3E1EA7KF317000".to_string()),
            ..Default::default()
        };
        let result = apply_update(MemoryUnitOfWork::new(&db), &AutoUsaKey::Id(1), taken).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        let malformed = AutoUsaUpdate {
            vin: Some("SHORT".to_string()),
            ..Default::default()
        };
        let result = apply_update(MemoryUnitOfWork::new(&db), &AutoUsaKey::Id(1), malformed).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        // Mantener el propio VIN no es un conflicto
        let same = AutoUsaUpdate {
            vin: Some(VIN.to_string()),
            ..Default::default()
        };
        assert!(apply_update(MemoryUnitOfWork::new(&db), &AutoUsaKey::Id(1), same)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates() {
        let db = Arc::new(Mutex::new(MemoryDb::default()));
        let vin = "WDB1240221A123456";
        let update = AutoUsaUpdate {
            vin: Some("IGNOREDIGNORED123".to_string()),
            loc_now_id: Some(LOC_C),
            arrival_date: Some(date("2024-02-01")),
            ..Default::default()
        };

        let outcome = upsert_by_vin(MemoryUnitOfWork::new(&db), vin, update).await.unwrap();
        let created = match outcome {
            UpsertOutcome::Created(auto) => auto,
            other => panic!("expected Created, got {:?}", other),
        };
        assert_eq!(created.vin, vin);
        assert_eq!(created.loc_now_id, Some(LOC_C));
        assert_eq!(history_len(&db), 0);

        let moved = AutoUsaUpdate {
            loc_now_id: Some(LOC_A),
            ..Default::default()
        };
        let outcome = upsert_by_vin(MemoryUnitOfWork::new(&db), vin, moved).await.unwrap();
        assert!(matches!(outcome, UpsertOutcome::Updated(ref auto) if auto.loc_now_id == Some(LOC_A)));
        assert_eq!(history_len(&db), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_existing_vin() {
        let db = seeded_db();
        let result = create(MemoryUnitOfWork::new(&db), VIN, AutoUsaUpdate::default()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_fresh_vehicle_history_is_single_current_stay() {
        let db = Arc::new(Mutex::new(MemoryDb::default()));
        let update = AutoUsaUpdate {
            loc_now_id: Some(LOC_C),
            ..Default::default()
        };
        let created = create(MemoryUnitOfWork::new(&db), VIN, update).await.unwrap();

        assert_eq!(history_len(&db), 0);
        let history = reconstruct_history(&view_of(created), &[]);
        assert_eq!(
            history,
            vec![StayRecord {
                loc_id: LOC_C,
                location_name: "USA - Savannah".to_string(),
                arrival_date: String::new(),
                departure_date: None,
            }]
        );
    }

    #[test]
    fn test_reconstruct_sorts_and_formats() {
        let mut auto = stored(&seeded_db());
        auto.loc_now_id = Some(LOC_C);
        auto.arrival_date = Some(date("2024-01-20"));
        auto.departure_date = None;
        let rows = vec![
            row(LOC_B, None, None),
            row(LOC_A, Some("2024-01-10"), Some("2024-01-15")),
        ];

        let history = reconstruct_history(&view_of(auto), &rows);

        let order: Vec<i32> = history.iter().map(|s| s.loc_id).collect();
        assert_eq!(order, vec![LOC_A, LOC_C, LOC_B]);
        assert_eq!(history[0].location_name, "USA - Yard 1");
        assert_eq!(history[0].departure_date.as_deref(), Some("2024-01-15"));
        assert_eq!(history[1].departure_date, None);
        // Archivada sin fechas: cadenas vacías, no null
        assert_eq!(history[2].arrival_date, "");
        assert_eq!(history[2].departure_date.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_arrivals_keep_insertion_order_at_end() {
        let mut auto = stored(&seeded_db());
        auto.loc_now_id = None;
        let rows = vec![
            row(LOC_C, None, None),
            row(LOC_A, Some("2024-05-01"), None),
            row(LOC_B, None, None),
        ];

        let view = view_of(auto);
        let first = reconstruct_history(&view, &rows);
        let second = reconstruct_history(&view, &rows);

        let order: Vec<i32> = first.iter().map(|s| s.loc_id).collect();
        assert_eq!(order, vec![LOC_A, LOC_C, LOC_B]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_location_and_no_rows_is_empty() {
        let mut auto = stored(&seeded_db());
        auto.loc_now_id = None;
        assert!(reconstruct_history(&view_of(auto), &[]).is_empty());
    }
}
