//! Pagination request validation and the response envelope.
//!
//! This module lives in `core` (zero internal deps) so both the repository
//! layer and the API layer agree on what a valid page request is.

use serde::Serialize;

use crate::error::CoreError;

/// Default page number when the client omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A validated, 1-based pagination request.
///
/// Construction is the only way to obtain one, so repositories never see a
/// zero or negative page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Validate `page` and `page_size`, applying defaults for `None`.
    ///
    /// Rejects `page < 1`, `page_size < 1`, and `page_size > MAX_PAGE_SIZE`.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be >= 1, got {page}"
            )));
        }
        if page_size < 1 {
            return Err(CoreError::Validation(format!(
                "page_size must be >= 1, got {page_size}"
            )));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(CoreError::Validation(format!(
                "page_size must be <= {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Number of items to skip before the requested page starts.
    /// Saturates so an absurdly large page number yields an empty page
    /// rather than an overflow.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size) as usize
    }

    /// Slice one page out of an already-filtered, already-ordered list and
    /// wrap it in the response envelope. `total_count` is taken from the
    /// full list length before slicing.
    pub fn paginate<T>(&self, all: Vec<T>) -> Paginated<T> {
        let total_count = all.len() as i64;
        let items: Vec<T> = all
            .into_iter()
            .skip(self.offset())
            .take(self.page_size as usize)
            .collect();

        Paginated {
            items,
            total_count,
            page_number: self.page,
            page_size: self.page_size,
        }
    }
}

/// One page of items plus paging metadata. Constructed fresh per request,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page_number: i64,
    pub page_size: i64,
}
