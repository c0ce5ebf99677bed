//! Modelo de Service
//!
//! Servicios del taller con precio y foto.

use rust_decimal::Decimal;
use sqlx::FromRow;

/// Service - mapea a la tabla services
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Service {
    pub service_id: i32,
    pub name: String,
    pub descr: String,
    pub price: Decimal,
    pub currency: String,
    pub photo_filename: String,
}

/// Datos para insertar un Service nuevo
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub descr: String,
    pub price: Decimal,
    pub currency: String,
    pub photo_filename: String,
}
