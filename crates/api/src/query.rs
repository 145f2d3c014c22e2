//! Shared query parameter types for API handlers.

use serde::Deserialize;
use pokedex_core::error::CoreError;
use pokedex_core::pagination::{PageRequest, DEFAULT_PAGE};

/// Page-based pagination parameters (`?page=&size=`).
///
/// Both values are optional; `page` defaults to 1 and `size` to the
/// configured default page size. Values below 1 are rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn into_page_request(self, default_size: i64) -> Result<PageRequest, CoreError> {
        PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.size.unwrap_or(default_size),
        )
    }
}
