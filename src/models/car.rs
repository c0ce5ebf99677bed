//! Modelo de Car
//!
//! Inventario local de coches a la venta.

use sqlx::FromRow;

/// Car - mapea a la tabla cars
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Car {
    pub car_id: i32,
    pub mark: String,
    pub model: String,
    pub year: i32,
    pub addi: String,
    pub transmission: String,
    pub mileage: i32,
    pub fuel_type: String,
    pub price: i32,
    pub discount: i32,
    pub quality: i32,
    pub engine: String,
    pub photo_url: String,
}

/// Datos para insertar un Car nuevo
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub mark: String,
    pub model: String,
    pub year: i32,
    pub addi: String,
    pub transmission: String,
    pub mileage: i32,
    pub fuel_type: String,
    pub price: i32,
    pub discount: i32,
    pub quality: i32,
    pub engine: String,
    pub photo_url: String,
}
