//! Almacenamiento de fotos de AutoUsa
//!
//! Un directorio por VIN bajo `PHOTOS_AUTO_DIR`. Las fotos llegan en un
//! `.zip` que se aplana en ese directorio; solo se guardan imágenes.

use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use zip::ZipArchive;

use crate::utils::errors::{AppError, AppResult};
use crate::utils::sanitize::secure_filename;

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const SKIP_NAMES: [&str; 1] = ["DS_Store"];
const DEFAULT_MAX_EXTRACTED_BYTES: u64 = 1024 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct PhotoStorage {
    root: PathBuf,
    base_url: String,
    max_extracted_bytes: u64,
}

impl PhotoStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
            max_extracted_bytes: DEFAULT_MAX_EXTRACTED_BYTES,
        }
    }

    pub fn with_max_extracted_bytes(mut self, max_extracted_bytes: u64) -> Self {
        self.max_extracted_bytes = max_extracted_bytes;
        self
    }

    pub fn vin_dir(&self, vin: &str) -> PathBuf {
        self.root.join(vin)
    }

    /// Extrae las imágenes del zip en el directorio del VIN; devuelve los nombres guardados
    pub async fn extract_zip(&self, vin: &str, archive: Vec<u8>) -> AppResult<Vec<String>> {
        let target = self.vin_dir(vin);
        let budget = self.max_extracted_bytes;
        let saved = tokio::task::spawn_blocking(move || extract_images(&target, archive, budget))
            .await
            .map_err(|e| AppError::Internal(format!("Photo extraction task failed: {}", e)))??;

        info!("📷 {} fotos guardadas para VIN {}", saved.len(), vin);
        Ok(saved)
    }

    /// URLs públicas de las fotos del VIN, ordenadas; `None` si no hay directorio
    pub async fn list_photos(&self, vin: &str) -> AppResult<Option<Vec<String>>> {
        let dir = self.vin_dir(vin);
        if !tokio::fs::try_exists(&dir).await? {
            return Ok(None);
        }

        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || SKIP_NAMES.contains(&name.as_str()) || !is_image(&name) {
                continue;
            }
            names.push(name);
        }
        names.sort();

        Ok(Some(
            names
                .into_iter()
                .map(|name| format!("{}/photos/autousa/{}/{}", self.base_url, vin, name))
                .collect(),
        ))
    }

    /// Borra el directorio del VIN. Un fallo se registra pero no se propaga.
    pub async fn remove_photos(&self, vin: &str) {
        let dir = self.vin_dir(vin);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => info!("🗑️ Fotos eliminadas para VIN {}", vin),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Sin directorio de fotos para VIN {}", vin)
            }
            Err(e) => warn!("❌ No se pudieron eliminar las fotos de VIN {}: {}", vin, e),
        }
    }
}

fn is_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Extrae sin superar `budget` bytes descomprimidos; si falla, borra lo ya escrito
fn extract_images(target: &Path, archive: Vec<u8>, budget: u64) -> AppResult<Vec<String>> {
    let mut saved = Vec::new();
    match copy_images(target, archive, budget, &mut saved) {
        Ok(()) => Ok(saved),
        Err(e) => {
            for name in &saved {
                if let Err(remove_err) = fs::remove_file(target.join(name)) {
                    warn!("❌ No se pudo borrar {} tras un zip fallido: {}", name, remove_err);
                }
            }
            Err(e)
        }
    }
}

fn too_large() -> AppError {
    AppError::BadRequest("Extracted photos exceed the allowed size".to_string())
}

fn copy_images(
    target: &Path,
    archive: Vec<u8>,
    budget: u64,
    saved: &mut Vec<String>,
) -> AppResult<()> {
    let mut zip = ZipArchive::new(Cursor::new(archive))?;
    fs::create_dir_all(target)?;

    let mut remaining = budget;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        let entry_name = entry.name().to_string();
        if entry_name.contains("__MACOSX") || entry_name.starts_with("._") {
            continue;
        }

        // Solo el último componente: el zip se aplana en el directorio del VIN
        let base_name = entry_name.rsplit('/').next().unwrap_or_default();
        let safe_name = secure_filename(base_name);
        if safe_name.is_empty() || SKIP_NAMES.contains(&safe_name.as_str()) || !is_image(&safe_name) {
            continue;
        }

        if entry.size() > remaining {
            return Err(too_large());
        }

        let mut output = fs::File::create(target.join(&safe_name))?;
        saved.push(safe_name);

        // El tamaño declarado en la cabecera puede mentir: se corta igualmente
        let mut limited = (&mut entry).take(remaining.saturating_add(1));
        let written = io::copy(&mut limited, &mut output)?;
        if written > remaining {
            return Err(too_large());
        }
        remaining -= written;
    }

    Ok(())
}
