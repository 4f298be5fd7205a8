//! Page-window pagination over formatted records

use std::ops::Range;

use serde::Deserialize;

/// Fixed number of questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: usize,
}

impl Pagination {
    /// Create pagination, clamping the page to a minimum of 1.
    pub fn new(page: i64) -> Self {
        Self {
            page: page.max(1) as usize,
        }
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    /// Index range of this page within a list of `len` records.
    ///
    /// Pages past the end yield an empty range.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = self.offset().min(len);
        let end = self.offset().saturating_add(QUESTIONS_PER_PAGE).min(len);
        start..end
    }

    /// Copy out the records on this page.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items[self.window(items.len())].to_vec()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// `?page=` query parameter.
///
/// Kept as a raw string so that a non-numeric value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }
}
