//! Middleware del sistema
//!
//! Este módulo contiene el middleware de autenticación por API key, CORS,
//! rate limiting y cabeceras de seguridad.

pub mod auth;
pub mod cors;
pub mod rate_limit;
pub mod security_headers;

pub use auth::api_key_middleware;
pub use cors::cors_layer;
pub use rate_limit::{rate_limit_middleware, RateLimiters};
pub use security_headers::security_headers_middleware;
