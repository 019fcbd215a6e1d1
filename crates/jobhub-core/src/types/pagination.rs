//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default pagination offset.
const DEFAULT_FROM: u64 = 0;
/// Default pagination limit.
const DEFAULT_SIZE: u64 = 10;

/// Offset/limit window for paginated queries.
///
/// The wire contract uses `from` (offset, default 0) and `size` (limit,
/// default 10). A `from` beyond the end of the result set yields an empty
/// page, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPage {
    /// Number of items to skip.
    #[serde(default = "default_from")]
    pub from: u64,
    /// Maximum number of items to return.
    #[serde(default = "default_size")]
    pub size: u64,
}

impl OffsetPage {
    /// Create a new page window.
    pub fn new(from: u64, size: u64) -> Self {
        Self { from, size }
    }

    /// The SQL `OFFSET` value, saturated to the bind parameter range.
    pub fn offset(&self) -> i64 {
        self.from.min(i64::MAX as u64) as i64
    }

    /// The SQL `LIMIT` value, saturated to the bind parameter range.
    pub fn limit(&self) -> i64 {
        self.size.min(i64::MAX as u64) as i64
    }
}

impl Default for OffsetPage {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM,
            size: DEFAULT_SIZE,
        }
    }
}

fn default_from() -> u64 {
    DEFAULT_FROM
}

fn default_size() -> u64 {
    DEFAULT_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_zero_and_ten() {
        let page = OffsetPage::default();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let page: OffsetPage = serde_json::from_str("{}").unwrap();
        assert_eq!(page, OffsetPage::default());

        let page: OffsetPage = serde_json::from_str(r#"{"from": 5}"#).unwrap();
        assert_eq!(page, OffsetPage::new(5, 10));
    }

    #[test]
    fn window_saturates_instead_of_wrapping() {
        let page = OffsetPage::new(u64::MAX, u64::MAX);
        assert_eq!(page.offset(), i64::MAX);
        assert_eq!(page.limit(), i64::MAX);
    }
}
