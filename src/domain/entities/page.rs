//! Pagination request and result envelope.

/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 100;

/// Page number used when none (or an unparsable one) is supplied.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when none (or an unparsable one) is supplied.
pub const DEFAULT_LIMIT: i64 = 10;

/// A normalized page request.
///
/// Construct through [`PaginationParams::normalized`] so that `page >= 1` and
/// `1 <= limit <= MAX_LIMIT` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: i64,
    pub limit: i64,
}

impl PaginationParams {
    /// Builds params from optional raw values.
    ///
    /// Absent values take their defaults; `page` is floored at 1 and `limit`
    /// is clamped to `1..=MAX_LIMIT`.
    pub fn normalized(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::normalized(None, None)
    }
}

/// One page of results plus the total item count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_next: bool,
}

impl<T> PagedResult<T> {
    /// Wraps a fetched page, deriving `has_next` from the total.
    pub fn new(data: Vec<T>, total: i64, params: PaginationParams) -> Self {
        let has_next = params.page.saturating_mul(params.limit) < total;
        Self {
            data,
            total,
            page: params.page,
            limit: params.limit,
            has_next,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            has_next: self.has_next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_negative_values_floor_to_one() {
        let params = PaginationParams::normalized(Some(-1), Some(-5));
        assert_eq!(params, PaginationParams { page: 1, limit: 1 });
    }

    #[test]
    fn test_zero_values_floor_to_one() {
        let params = PaginationParams::normalized(Some(0), Some(0));
        assert_eq!(params, PaginationParams { page: 1, limit: 1 });
    }

    #[test]
    fn test_limit_capped_at_max() {
        let params = PaginationParams::normalized(Some(2), Some(500));
        assert_eq!(params.limit, MAX_LIMIT);
        assert_eq!(params.offset(), 100);
    }

    #[test]
    fn test_offset_for_third_page() {
        let params = PaginationParams::normalized(Some(3), Some(20));
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn test_has_next() {
        let params = PaginationParams::normalized(Some(1), Some(10));
        assert!(PagedResult::new(vec![0; 10], 15, params).has_next);

        let params = PaginationParams::normalized(Some(2), Some(10));
        assert!(!PagedResult::new(vec![0; 5], 15, params).has_next);

        let params = PaginationParams::normalized(Some(1), Some(10));
        assert!(!PagedResult::new(vec![0; 10], 10, params).has_next);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let params = PaginationParams::normalized(Some(1), Some(2));
        let page = PagedResult::new(vec![1, 2], 3, params).map(|n| n * 10);

        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.total, 3);
        assert!(page.has_next);
    }
}
