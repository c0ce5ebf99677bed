//! Paginación de listados
//!
//! `?page=` y `?per_page=` se leen de forma tolerante: un valor inválido
//! usa el valor por defecto en lugar de rechazar la request.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: i64 = 50;
pub const MAX_PER_PAGE: i64 = 100;

/// Query string cruda de un listado paginado
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Parámetros de paginación ya normalizados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl PaginationQuery {
    pub fn resolve(&self) -> Pagination {
        let parse = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse::<i64>().ok());

        let page = parse(&self.page).unwrap_or(1).max(1);
        let per_page = parse(&self.per_page)
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);

        Pagination { page, per_page }
    }
}

impl Pagination {
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// Satura en `i64::MAX` para páginas enormes: Postgres devuelve un listado vacío
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// Metadatos de paginación devueltos al cliente
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub pages: i64,
}

/// Response genérica de listado paginado
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, pagination: Pagination, total: i64) -> Self {
        let pages = if total == 0 {
            0
        } else {
            (total + pagination.per_page - 1) / pagination.per_page
        };

        Self {
            data,
            pagination: PaginationMeta {
                page: pagination.page,
                per_page: pagination.per_page,
                total,
                pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, per_page: Option<&str>) -> PaginationQuery {
        PaginationQuery {
            page: page.map(String::from),
            per_page: per_page.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let p = PaginationQuery::default().resolve();
        assert_eq!(p, Pagination { page: 1, per_page: 50 });
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_per_page_is_capped() {
        let p = query(Some("3"), Some("500")).resolve();
        assert_eq!(p.per_page, 100);
        assert_eq!(p.offset(), 200);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let p = query(Some("abc"), Some("-4")).resolve();
        assert_eq!(p, Pagination { page: 1, per_page: 1 });
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let p = query(Some("9223372036854775807"), None).resolve();
        assert_eq!(p.page, i64::MAX);
        assert_eq!(p.offset(), i64::MAX);

        let p = query(Some("9223372036854775807"), Some("100")).resolve();
        assert_eq!(p.offset(), i64::MAX);
    }

    #[test]
    fn test_pages_rounds_up() {
        let p = query(Some("1"), Some("2")).resolve();
        let page = Paginated::new(vec![1, 2], p, 5);
        assert_eq!(page.pagination.pages, 3);
        assert_eq!(page.pagination.total, 5);

        let empty: Paginated<i32> = Paginated::new(vec![], p, 0);
        assert_eq!(empty.pagination.pages, 0);
    }
}
