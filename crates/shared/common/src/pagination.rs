//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// First page index (pages are zero-based on the wire)
pub const DEFAULT_PAGE_NUMBER: u64 = 0;

/// Default page size when none is requested
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Hard cap on page size
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination query parameters, reusable across all list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Offset for database queries
    pub fn offset(&self) -> u64 {
        self.page * self.limit()
    }

    /// Page size clamped to the allowed range
    pub fn limit(&self) -> u64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of entities together with the total element count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.limit(),
            total,
        }
    }

    /// Convert the page contents, keeping the page metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

/// Page metadata attached to list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl PageInfo {
    /// Derive metadata from a page position and total count.
    ///
    /// An empty result still reports one page.
    pub fn of(page: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size > 0 {
            (total_elements + size - 1) / size
        } else {
            0
        };

        Self {
            page,
            size,
            total_elements,
            total_pages: total_pages.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_skips_previous_pages() {
        let request = PageRequest::new(2, 20);
        assert_eq!(request.offset(), 40);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(PageRequest::new(0, 500).limit(), MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, 0).limit(), 1);
    }

    #[test]
    fn page_info_rounds_total_pages_up() {
        let info = PageInfo::of(0, 2, 5);
        assert_eq!(info.total_elements, 5);
        assert_eq!(info.total_pages, 3);
    }

    #[test]
    fn page_info_reports_at_least_one_page() {
        assert_eq!(PageInfo::of(0, 20, 0).total_pages, 1);
    }

    #[test]
    fn page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], &PageRequest::new(1, 3), 9);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total, 9);
    }
}
