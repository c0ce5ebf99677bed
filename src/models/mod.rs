//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL de `migrations/`.

pub mod autousa;
pub mod car;
pub mod client;
pub mod location;
pub mod service;
