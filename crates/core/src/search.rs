//! Pagination and substring-search helpers for list endpoints.
//!
//! Every list endpoint accepts `?limit=&skip=`; the values are clamped here so
//! the repositories never see an unbounded or negative page.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Hard upper bound on `limit` for every list endpoint.
pub const MAX_PAGE_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Clamping
// ---------------------------------------------------------------------------

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a user-provided skip count to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

/// Resolved page window, ready to bind as `LIMIT $n OFFSET $m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub skip: i64,
}

impl Page {
    /// Build a page from raw query values using the default bounds.
    pub fn from_params(limit: Option<i64>, skip: Option<i64>) -> Self {
        Self {
            limit: clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
            skip: clamp_skip(skip),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Turn free text into an `ILIKE` pattern matching it as a literal substring.
///
/// `%`, `_` and `\` in the input are escaped so they match themselves.
/// Returns `None` for blank input, meaning "no filter".
pub fn substring_pattern(search: Option<&str>) -> Option<String> {
    let term = search?.trim();
    if term.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    Some(pattern)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
