//! Pagination extractor
//!
//! Extracts offset-based pagination parameters from query strings and
//! normalizes them into a [`PageQuery`].

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use bookstack_core::PageQuery;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Number of items per page
    #[serde(default)]
    pub items_per_page: Option<i64>,
}

/// Validated pagination parameters
///
/// Out-of-range values are normalized rather than rejected: page is floored
/// at 1 and items_per_page clamped to 1..=100.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageQuery);

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let defaults = PageQuery::default();
        Self(PageQuery::new(
            params.page.unwrap_or(defaults.page),
            params.items_per_page.unwrap_or(defaults.items_per_page),
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let Pagination(page) = Pagination::from(PaginationParams {
            page: None,
            items_per_page: None,
        });
        assert_eq!(page.page, 1);
        assert_eq!(page.items_per_page, 10);
    }

    #[test]
    fn test_normalization() {
        let Pagination(page) = Pagination::from(PaginationParams {
            page: Some(0),
            items_per_page: Some(500),
        });
        assert_eq!(page.page, 1);
        assert_eq!(page.items_per_page, 100);
    }

    #[test]
    fn test_explicit_values() {
        let Pagination(page) = Pagination::from(PaginationParams {
            page: Some(3),
            items_per_page: Some(25),
        });
        assert_eq!(page.page, 3);
        assert_eq!(page.items_per_page, 25);
        assert_eq!(page.offset(), 50);
    }
}
