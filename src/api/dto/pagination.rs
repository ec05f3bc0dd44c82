//! Pagination query parameters and the paged response envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::entities::{PagedResult, PaginationParams};

/// Raw `page` / `limit` query parameters.
///
/// Values that do not parse as integers (including empty strings) are
/// treated as absent, so malformed input degrades to defaults instead of
/// failing the request.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListUsersQuery {
    /// Normalizes into a page request.
    ///
    /// # Defaults
    ///
    /// - `page`: 1, floored at 1
    /// - `limit`: 10, clamped to `1..=100`
    pub fn to_params(&self) -> PaginationParams {
        PaginationParams::normalized(self.page, self.limit)
    }
}

/// Paged list response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_next: bool,
}

impl<T, U: Into<T>> From<PagedResult<U>> for PagedResponse<T> {
    fn from(result: PagedResult<U>) -> Self {
        let result = result.map(Into::into);
        Self {
            data: result.data,
            total: result.total,
            page: result.page,
            limit: result.limit,
            has_next: result.has_next,
        }
    }
}
