//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use validator::ValidationError;

use crate::utils::errors::AppError;

lazy_static! {
    static ref VIN_RE: Regex = Regex::new(r"^[A-Za-z0-9]{17}$").unwrap();
}

/// Formato de fecha aceptado por la API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validar formato de VIN (17 caracteres alfanuméricos)
pub fn validate_vin(vin: &str) -> bool {
    VIN_RE.is_match(vin)
}

/// Igual que `validate_vin` pero como error listo para el handler
pub fn require_valid_vin(vin: &str) -> Result<(), AppError> {
    if validate_vin(vin) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Invalid VIN format. VIN must be 17 alphanumeric characters".to_string(),
        ))
    }
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Fecha `YYYY-MM-DD` o nada: cualquier otro formato se trata como ausente
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value
        .filter(|s| !s.is_empty())
        .and_then(|s| validate_date(s).ok())
}

/// Normalizar un entero que puede llegar como número, string o vacío
pub fn normalize_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}
