//! Page/size pagination arithmetic.
//!
//! Listing endpoints accept a 1-based `page` and a `size`, translate them to
//! an SQL `OFFSET`/`LIMIT` pair, and report the total number of pages derived
//! from the row count.

use serde::Serialize;
use validator::Validate;

use crate::error::CoreError;

/// Page returned when the client omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client omits `size`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// A validated pagination request. Both fields are at least 1.
///
/// No upper bound is placed on `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct PageRequest {
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: i64,
    #[validate(range(min = 1, message = "size must be greater than or equal to 1"))]
    pub size: i64,
}

impl PageRequest {
    /// Build a request, rejecting `page < 1` or `size < 1`.
    pub fn new(page: i64, size: i64) -> Result<Self, CoreError> {
        let request = Self { page, size };
        request.validate()?;
        Ok(request)
    }

    /// Number of rows to skip: `(page - 1) * size`, saturating at `i64::MAX`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// Number of pages needed to hold `total` rows, `ceil(total / size)`.
///
/// Returns 0 when there are no rows.
pub fn page_count(total: i64, size: i64) -> i64 {
    if total <= 0 || size <= 0 {
        return 0;
    }
    total / size + i64::from(total % size != 0)
}

/// Paginated list envelope: `{ items, total, page, size, pages }`.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub pages: i64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            size: request.size,
            pages: page_count(total, request.size),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
