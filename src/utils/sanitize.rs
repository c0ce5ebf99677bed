//! Limpieza de entradas de texto
//!
//! Quita etiquetas HTML, recorta longitudes a las columnas de la base
//! y normaliza emails y nombres de archivo.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HTML_TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Limpiar un string: trim, sin etiquetas HTML y truncado a `max_length` caracteres.
/// Devuelve `None` si el resultado queda vacío.
pub fn sanitize_string(value: &str, max_length: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = HTML_TAG_RE.replace_all(trimmed, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return None;
    }

    Some(stripped.chars().take(max_length).collect())
}

/// Limpiar y validar un email; devuelve el email en minúsculas o `None` si no es válido
pub fn sanitize_email(email: &str) -> Option<String> {
    let email = sanitize_string(email, 255)?;

    let (local, domain) = email.rsplit_once('@')?;
    if local.is_empty() || !domain.contains('.') {
        return None;
    }

    Some(email.to_lowercase())
}

/// Nombre de archivo seguro para el disco: solo ASCII alfanumérico, `_`, `.` y `-`,
/// espacios convertidos a `_` y sin puntos o guiones bajos al inicio/final.
pub fn secure_filename(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Honda  ", 30), Some("Honda".to_string()));
        assert_eq!(
            sanitize_string("<script>alert(1)</script>Civic", 40),
            Some("alert(1)Civic".to_string())
        );
        assert_eq!(sanitize_string("abcdef", 3), Some("abc".to_string()));
        assert_eq!(sanitize_string("   ", 10), None);
        assert_eq!(sanitize_string("<b></b>", 10), None);
    }

    #[test]
    fn test_sanitize_email() {
        assert_eq!(
            sanitize_email(" Test@Example.COM "),
            Some("test@example.com".to_string())
        );
        assert_eq!(sanitize_email("invalid-email"), None);
        assert_eq!(sanitize_email("test@localhost"), None);
        assert_eq!(sanitize_email(""), None);
    }

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("front view.JPG"), "front_view.JPG");
        assert_eq!(secure_filename(".DS_Store"), "DS_Store");
        assert_eq!(secure_filename("._hidden.png"), "hidden.png");
        assert_eq!(secure_filename("фото.jpg"), "jpg");
        assert_eq!(secure_filename("..."), "");
    }
}
