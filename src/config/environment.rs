//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! `DATABASE_URL` y `API_KEY` son obligatorias; el resto tiene valor por defecto.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Errores al leer la configuración
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("Invalid value '{value}' for environment variable {var}")]
    Invalid { var: String, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_key: String,
    pub cors_origins: Vec<String>,
    /// URL pública usada para construir las URLs de las fotos
    pub base_url: String,
    pub photos_dir: PathBuf,
    pub photos_auto_dir: PathBuf,
    /// Frontend SPA opcional servido como fallback
    pub static_dir: Option<PathBuf>,
    pub rate_limit_enabled: bool,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    pub upload_rate_limit_requests: u32,
    pub max_upload_bytes: usize,
    /// Tope de bytes descomprimidos por zip subido
    pub max_extracted_bytes: u64,
    pub run_migrations: bool,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración desde cualquier fuente clave → valor
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<String> = ["DATABASE_URL", "API_KEY"]
            .into_iter()
            .filter(|key| get(key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            environment: or_default("ENVIRONMENT", "development"),
            host: or_default("HOST", "0.0.0.0"),
            port: parse_var(&get, "PORT", 5000)?,
            database_url: get("DATABASE_URL").unwrap_or_default(),
            api_key: get("API_KEY").unwrap_or_default(),
            cors_origins: or_default("CORS_ORIGINS", "*")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            base_url: or_default("BASE_URL", "https://rdmotors.com.ua")
                .trim_end_matches('/')
                .to_string(),
            photos_dir: PathBuf::from(or_default("PHOTOS_DIR", "static/photos/services")),
            photos_auto_dir: PathBuf::from(or_default(
                "PHOTOS_AUTO_DIR",
                "/var/www/rdmotorsAPI/static/photos/autousa",
            )),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            rate_limit_enabled: parse_bool(&get, "RATE_LIMIT_ENABLED", true)?,
            rate_limit_requests: parse_var(&get, "RATE_LIMIT_REQUESTS", 100)?,
            rate_limit_window: parse_var(&get, "RATE_LIMIT_WINDOW", 3600)?,
            upload_rate_limit_requests: parse_var(&get, "UPLOAD_RATE_LIMIT_REQUESTS", 20)?,
            max_upload_bytes: parse_var(&get, "MAX_UPLOAD_BYTES", 200 * 1024 * 1024)?,
            max_extracted_bytes: parse_var(&get, "MAX_EXTRACTED_BYTES", 1024 * 1024 * 1024)?,
            run_migrations: parse_bool(&get, "RUN_MIGRATIONS", true)?,
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `*` en CORS_ORIGINS habilita cualquier origen
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<T, G>(get: &G, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

fn parse_bool<G>(get: &G, key: &str, default: bool) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key).map(|v| v.trim().to_lowercase()) {
        Some(v) if matches!(v.as_str(), "true" | "1" | "yes") => Ok(true),
        Some(v) if matches!(v.as_str(), "false" | "0" | "no") => Ok(false),
        Some(v) => Err(ConfigError::Invalid {
            var: key.to_string(),
            value: v,
        }),
        None => Ok(default),
    }
}
