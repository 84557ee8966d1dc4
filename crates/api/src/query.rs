//! Shared query parameter types for API handlers.

use quill_core::error::CoreError;
use quill_core::pagination::PageRequest;
use serde::Deserialize;

/// Generic pagination parameters (`?page=&page_size=`).
///
/// Used by any handler that supports paginated listing. Validation happens
/// in [`PaginationParams::into_page`] so out-of-range values become a 400
/// instead of silently producing undefined slices.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// Validate into a [`PageRequest`], applying defaults for omitted values.
    pub fn into_page(self) -> Result<PageRequest, CoreError> {
        PageRequest::new(self.page, self.page_size)
    }
}
