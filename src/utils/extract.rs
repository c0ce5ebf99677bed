//! Extractores propios
//!
//! `AppJson` se comporta como `axum::Json` pero responde con el formato
//! de error de la API (400) en lugar del rechazo en texto plano de axum.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::utils::errors::AppError;

pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::BadRequest(format!(
                "Invalid JSON: {}",
                rejection.body_text()
            ))),
        }
    }
}
