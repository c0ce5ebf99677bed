//! Middleware de autenticación por API key
//!
//! Las rutas protegidas exigen `Authorization: Bearer <API_KEY>`.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::middleware::rate_limit::client_ip;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extraer el token de un header `Bearer <token>`
pub fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").map(str::trim)
}

/// Comparación sin salida temprana: el tiempo no depende del primer byte distinto
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes()) {
        diff |= x ^ y;
    }
    diff == 0
}

pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(|token| constant_time_eq(token, &state.config.api_key))
        .unwrap_or(false);

    if !authorized {
        warn!(
            "Unauthorized access attempt to {} from {}",
            request.uri().path(),
            client_ip(&request)
        );
        return Err(AppError::Unauthorized("Invalid or missing API key".to_string()));
    }

    Ok(next.run(request).await)
}
