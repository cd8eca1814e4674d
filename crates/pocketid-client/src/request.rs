//! URL construction and pagination query encoding.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed deadline for the `/healthz` probe, independent of request timeouts.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the API key on every outbound request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Compose an absolute URL from the base, a path, and query parameters.
///
/// The path must already carry its leading slash. An empty query appends
/// nothing; otherwise keys are percent-encoded in insertion order.
pub fn build_url(base_url: &str, path: &str, query: &[(String, String)]) -> Result<String> {
    if query.is_empty() {
        return Ok(format!("{base_url}{path}"));
    }
    let encoded = serde_urlencoded::to_string(query)
        .map_err(|e| Error::with_source(ErrorKind::Other(e.to_string()), e))?;
    Ok(format!("{base_url}{path}?{encoded}"))
}

/// Sort order for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Wire value expected by the upstream query grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Pagination, search, and sort parameters for list endpoints.
///
/// Each present field maps to exactly one query key; absent fields emit
/// no key at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub sort_column: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl ListParams {
    /// Start from empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Limit the number of items per page.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter by a search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sort by a column in the given direction.
    pub fn sort(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_column = Some(column.into());
        self.sort_direction = Some(direction);
        self
    }

    /// Project the parameters onto the upstream query grammar.
    ///
    /// Pure; key order is fixed: page, limit, search, column, direction.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("pagination[page]".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("pagination[limit]".to_string(), limit.to_string()));
        }
        if let Some(ref search) = self.search {
            query.push(("search".to_string(), search.clone()));
        }
        if let Some(ref column) = self.sort_column {
            query.push(("sort[column]".to_string(), column.clone()));
        }
        if let Some(direction) = self.sort_direction {
            query.push(("sort[direction]".to_string(), direction.as_str().to_string()));
        }
        query
    }
}
