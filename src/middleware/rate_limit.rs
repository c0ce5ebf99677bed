//! Middleware de Rate Limiting
//!
//! Ventana fija por IP de cliente, en memoria. Cada nivel (estándar,
//! estricto, subida de fotos) lleva su propio contador.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::warn;

use crate::config::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Estructura para almacenar información de rate limiting por IP
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

/// Estado de un nivel de rate limiting
#[derive(Clone)]
pub struct RateLimitState {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
    enabled: bool,
}

impl RateLimitState {
    pub fn new(max_requests: u32, window_duration: Duration, enabled: bool) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window_duration,
            enabled,
        }
    }

    /// Verificar si una IP ha excedido el límite
    pub async fn check_rate_limit(&self, ip: &str) -> Result<(), RateLimitError> {
        if !self.enabled {
            return Ok(());
        }

        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(ip.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if info.requests >= self.max_requests {
            return Err(RateLimitError::LimitExceeded);
        }

        info.requests += 1;
        Ok(())
    }
}

/// Los tres niveles usados por las rutas
#[derive(Clone)]
pub struct RateLimiters {
    pub standard: RateLimitState,
    /// Altas y borrados: la mitad del estándar
    pub strict: RateLimitState,
    pub upload: RateLimitState,
}

impl RateLimiters {
    pub fn new(config: &EnvironmentConfig) -> Self {
        let window = Duration::from_secs(config.rate_limit_window);
        let enabled = config.rate_limit_enabled;

        Self {
            standard: RateLimitState::new(config.rate_limit_requests, window, enabled),
            strict: RateLimitState::new((config.rate_limit_requests / 2).max(1), window, enabled),
            upload: RateLimitState::new(config.upload_rate_limit_requests, window, enabled),
        }
    }
}

/// Errores de rate limiting
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit exceeded")]
    LimitExceeded,
}

impl From<RateLimitError> for AppError {
    fn from(_: RateLimitError) -> Self {
        AppError::RateLimitExceeded
    }
}

/// IP del cliente: primer valor de `x-forwarded-for`, si no la dirección del peer
pub fn client_ip(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match forwarded {
        Some(ip) => ip.to_string(),
        None => request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    }
}

/// Middleware de rate limiting; el nivel lo decide el estado con el que se monta
pub async fn rate_limit_middleware(
    State(rate_limit_state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = client_ip(&request);

    if let Err(e) = rate_limit_state.check_rate_limit(&ip).await {
        warn!("Rate limit excedido para {} en {}", ip, request.uri().path());
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
