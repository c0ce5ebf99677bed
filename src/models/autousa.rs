//! Modelo de AutoUsa
//!
//! Vehículos importados desde USA y su historial de localizaciones.
//! Mapea a las tablas `autousa` y `autousa_history`.

use chrono::NaiveDate;
use sqlx::FromRow;

use crate::models::location::Location;

/// AutoUsa principal - mapea a la tabla autousa
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AutoUsa {
    pub id: i32,
    pub vin: String,
    pub container_number: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub loc_now_id: Option<i32>,
    pub loc_next_id: Option<i32>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
}

/// Datos para insertar un AutoUsa nuevo
#[derive(Debug, Clone, PartialEq)]
pub struct NewAutoUsa {
    pub vin: String,
    pub container_number: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub loc_now_id: Option<i32>,
    pub loc_next_id: Option<i32>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
}

/// Estancia completada que se archiva en autousa_history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub autousa_id: i32,
    pub loc_id: i32,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
}

/// AutoUsa con sus localizaciones actual y siguiente resueltas (LEFT JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct AutoUsaView {
    #[sqlx(flatten)]
    pub auto: AutoUsa,
    pub loc_now_location_id: Option<i32>,
    pub loc_now_country: Option<String>,
    pub loc_now_description: Option<String>,
    pub loc_next_location_id: Option<i32>,
    pub loc_next_country: Option<String>,
    pub loc_next_description: Option<String>,
}

impl AutoUsaView {
    pub fn loc_now(&self) -> Option<Location> {
        self.loc_now_location_id.map(|location_id| Location {
            location_id,
            country: self.loc_now_country.clone(),
            description: self.loc_now_description.clone(),
        })
    }

    pub fn loc_next(&self) -> Option<Location> {
        self.loc_next_location_id.map(|location_id| Location {
            location_id,
            country: self.loc_next_country.clone(),
            description: self.loc_next_description.clone(),
        })
    }
}

/// Fila de autousa_history con su localización resuelta, en orden de inserción
#[derive(Debug, Clone, FromRow)]
pub struct HistoryStayRow {
    pub loc_id: i32,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub location_id: Option<i32>,
    pub country: Option<String>,
    pub description: Option<String>,
}

impl HistoryStayRow {
    pub fn location(&self) -> Option<Location> {
        self.location_id.map(|location_id| Location {
            location_id,
            country: self.country.clone(),
            description: self.description.clone(),
        })
    }
}
