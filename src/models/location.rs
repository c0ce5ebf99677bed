//! Modelo de Location

use serde::Serialize;
use sqlx::FromRow;

/// Location - mapea a la tabla locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Location {
    pub location_id: i32,
    pub country: Option<String>,
    pub description: Option<String>,
}

impl Location {
    /// Etiqueta legible `"<country> - <description>"`
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.country.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default()
        )
    }
}

/// Etiqueta de una referencia opcional; vacía si la localización no se resuelve
pub fn label_of(location: Option<&Location>) -> String {
    location.map(Location::label).unwrap_or_default()
}
