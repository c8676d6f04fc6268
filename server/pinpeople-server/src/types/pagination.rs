//! Pagination query parameters

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::PaginationInfo;

const DEFAULT_PAGE_SIZE: i32 = 50;
const MAX_PAGE_SIZE: i32 = 200;

/// Page-based pagination, 1-indexed
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number, starting at 1
    pub page: Option<i32>,
    /// Items per page, capped at 200
    pub page_size: Option<i32>,
}

impl PaginationParams {
    pub fn page(&self) -> i32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size())
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page() - 1) * self.limit()
    }

    /// Build response metadata for a total row count
    pub fn info(&self, total_count: i64) -> PaginationInfo {
        let page = self.page();
        let page_size = self.page_size();
        let total_pages = ((total_count + i64::from(page_size) - 1) / i64::from(page_size))
            .try_into()
            .unwrap_or(i32::MAX);
        PaginationInfo {
            page,
            page_size,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let params = PaginationParams {
            page: None,
            page_size: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn page_size_is_clamped() {
        let params = PaginationParams {
            page: Some(0),
            page_size: Some(10_000),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn info_reports_boundaries() {
        let params = PaginationParams {
            page: Some(2),
            page_size: Some(10),
        };
        let info = params.info(25);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_next);
        assert!(info.has_previous);
        assert_eq!(params.offset(), 10);
    }
}
