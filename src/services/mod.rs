//! Services module
//!
//! Lógica de negocio que no pertenece a un único repositorio: el historial
//! de localizaciones de AutoUsa y el almacenamiento de fotos.

pub mod location_history_service;
pub mod photo_storage;
