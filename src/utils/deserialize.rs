//! Adaptadores `deserialize_with` para entradas tolerantes
//!
//! Las fechas y los ids de localización llegan desde formularios
//! externos con formatos variables; lo que no se entiende se trata
//! como ausente en lugar de rechazar la request.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::validation::{normalize_int, parse_date};

/// Fecha `YYYY-MM-DD`; cualquier otro valor (número, null, otro formato) es `None`
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_date(value.as_str()))
}

/// Entero que puede llegar como número o string; vacío o inválido es `None`
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_int(&value))
}

/// Igual que `lenient_int` pero distingue "clave presente" de "clave ausente".
/// Usar junto con `#[serde(default)]`: ausente → `None`, presente → `Some(..)`.
pub fn present_lenient_int<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(normalize_int(&value)))
}
