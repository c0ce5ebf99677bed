//! Modelo de Client

use sqlx::FromRow;

/// Client - mapea a la tabla clients
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Client {
    pub client_id: i32,
    pub login: String,
    pub email: String,
    pub number: String,
    pub status: String,
}

/// Datos para insertar un Client nuevo
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub login: String,
    pub email: String,
    pub number: String,
    pub status: String,
}
