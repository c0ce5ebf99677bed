//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! paginación, limpieza de entradas y deserialización tolerante.

pub mod deserialize;
pub mod errors;
pub mod extract;
pub mod pagination;
pub mod sanitize;
pub mod validation;
