//! Shared query parameter types for API handlers.

use serde::Deserialize;
use studyhub_core::search::Page;

/// Pagination parameters (`?limit=&skip=`).
///
/// Clamped through [`Page::from_params`]: `limit` to `1..=50` (default 10),
/// `skip` to `>= 0`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

impl PaginationParams {
    pub fn page(&self) -> Page {
        Page::from_params(self.limit, self.skip)
    }
}

/// Query parameters for `GET /questions`.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionListParams {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
    /// Case-insensitive substring matched against title and content.
    pub search: Option<String>,
}

impl QuestionListParams {
    pub fn page(&self) -> Page {
        Page::from_params(self.limit, self.skip)
    }
}
