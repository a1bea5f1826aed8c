//! Offset-based pagination value object
//!
//! List endpoints accept a 1-based page number and a page size and translate
//! them to a SQL OFFSET/LIMIT pair.

/// Default page size when none is requested
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 10;
/// Maximum page size
pub const MAX_ITEMS_PER_PAGE: i64 = 100;

/// Validated pagination parameters for offset-based listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number
    pub page: i64,
    /// Number of items per page (clamped to 1..=100)
    pub items_per_page: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageQuery {
    /// Create a page query, normalizing out-of-range values
    pub fn new(page: i64, items_per_page: i64) -> Self {
        Self {
            page: page.max(1),
            items_per_page: items_per_page.clamp(1, MAX_ITEMS_PER_PAGE),
        }
    }

    /// SQL offset: `(page - 1) * items_per_page`
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.items_per_page
    }

    /// SQL limit
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.items_per_page
    }

    /// Whether more rows exist past this page given a total count
    #[must_use]
    pub fn has_more(&self, total_count: i64) -> bool {
        self.page * self.items_per_page < total_count
    }
}
