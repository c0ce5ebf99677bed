//! Router de la API
//!
//! Monta las rutas protegidas por API key, las públicas, los estáticos de
//! fotos y las capas comunes (CORS, cabeceras de seguridad, trazas, compresión).

pub mod autousa_routes;
pub mod car_routes;
pub mod client_routes;
pub mod health_routes;
pub mod location_routes;
pub mod service_routes;

use axum::{
    http::{header, HeaderName, HeaderValue},
    middleware,
    routing::MethodRouter,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::middleware::rate_limit::RateLimitState;
use crate::middleware::{
    api_key_middleware, cors_layer, rate_limit_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Aplica un nivel de rate limiting a los métodos de una ruta
pub(crate) fn with_rate_limit(
    route: MethodRouter<AppState>,
    limiter: &RateLimitState,
) -> MethodRouter<AppState> {
    route.layer(middleware::from_fn_with_state(
        limiter.clone(),
        rate_limit_middleware,
    ))
}

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(autousa_routes::create_autousa_router(&state))
        .merge(service_routes::create_service_router(&state))
        .merge(client_routes::create_client_router(&state))
        .merge(car_routes::create_car_router())
        .merge(location_routes::create_location_router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ));

    // Las fotos de servicios se sustituyen sin cambiar de nombre: nunca cachear
    let service_photos = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("expires"),
            HeaderValue::from_static("0"),
        ))
        .service(ServeDir::new(&state.config.photos_dir));

    let public = Router::new()
        .merge(health_routes::create_health_router())
        .merge(autousa_routes::create_autousa_public_router())
        .merge(location_routes::create_location_public_router())
        .nest_service("/photos/services", service_photos)
        .nest_service(
            "/photos/autousa",
            ServeDir::new(&state.config.photos_auto_dir),
        );

    let mut app = protected.merge(public);

    // SPA: cualquier ruta desconocida sirve index.html
    if let Some(static_dir) = &state.config.static_dir {
        app = app.fallback_service(
            ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html"))),
        );
    }

    app.layer(middleware::from_fn(security_headers_middleware))
        .layer(cors_layer(&state.config))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
