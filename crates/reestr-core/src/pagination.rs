//! Pagination types for directory listings.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Number of records on one page.
pub const PAGE_SIZE: usize = 10;

/// A request for a page of results.
///
/// Pages are 1-based; anything below 1 is clamped up to 1. There is no upper
/// clamp, a page past the end simply selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
}

impl PageRequest {
    /// Creates a request for `page` with the directory page size.
    #[must_use]
    pub fn new(page: i64) -> Self {
        Self::with_size(page, PAGE_SIZE)
    }

    /// Creates a request with an explicit page size (at least 1).
    #[must_use]
    pub fn with_size(page: i64, size: usize) -> Self {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        Self {
            page,
            size: size.max(1),
        }
    }

    /// Creates a page request for the first page.
    #[must_use]
    pub fn first() -> Self {
        Self::new(1)
    }

    /// Returns the index of the first item on this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }

    /// Returns the slice bounds of this page within `total` items.
    ///
    /// Both ends are capped at `total`, so the range is empty past the end.
    #[must_use]
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = self.offset().min(total);
        let end = self.offset().saturating_add(self.size).min(total);
        start..end
    }

    /// Returns `ceil(total / size)`.
    #[must_use]
    pub const fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The requested page number (1-indexed, after clamping).
    pub current_page: usize,
    /// The number of items per page.
    pub page_size: usize,
    /// The number of items matching the query across all pages.
    pub total_items: usize,
    /// The total number of pages.
    pub total_pages: usize,
    /// Whether a later page holds items.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_previous: bool,
}

impl PageInfo {
    /// Creates page info for `request` over `total_items` matching items.
    #[must_use]
    pub fn new(request: PageRequest, total_items: usize) -> Self {
        let total_pages = request.total_pages(total_items);
        Self {
            current_page: request.page,
            page_size: request.size,
            total_items,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> PageResult<T> {
    /// Creates a page from items already cut to the page bounds.
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total_items: usize) -> Self {
        Self {
            items,
            info: PageInfo::new(request, total_items),
        }
    }

    /// Cuts the requested page out of the full, ordered item list.
    #[must_use]
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let items = all[request.bounds(all.len())].to_vec();
        Self::new(items, request, all.len())
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the requested page number.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.info.current_page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.info.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps_to_first_page() {
        assert_eq!(PageRequest::new(0).page, 1);
        assert_eq!(PageRequest::new(-7).page, 1);
        assert_eq!(PageRequest::new(3).page, 3);
        assert_eq!(PageRequest::default(), PageRequest::first());
    }

    #[test]
    fn test_page_request_offset_calculation() {
        assert_eq!(PageRequest::new(1).offset(), 0);
        assert_eq!(PageRequest::new(2).offset(), 10);
        assert_eq!(PageRequest::with_size(5, 15).offset(), 60);
    }

    #[test]
    fn test_bounds_past_the_end_are_empty() {
        let request = PageRequest::new(4);
        assert!(request.bounds(25).is_empty());
        assert_eq!(PageRequest::new(3).bounds(25), 20..25);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let request = PageRequest::first();
        assert_eq!(request.total_pages(0), 0);
        assert_eq!(request.total_pages(1), 1);
        assert_eq!(request.total_pages(10), 1);
        assert_eq!(request.total_pages(11), 2);
    }

    #[test]
    fn test_from_slice_first_page() {
        let all: Vec<i32> = (1..=25).collect();
        let page = PageResult::from_slice(&all, PageRequest::first());
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.info.total_items, 25);
        assert!(page.info.has_next);
        assert!(!page.info.has_previous);
    }

    #[test]
    fn test_from_slice_last_partial_page() {
        let all: Vec<i32> = (1..=25).collect();
        let page = PageResult::from_slice(&all, PageRequest::new(3));
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert!(!page.info.has_next);
        assert!(page.info.has_previous);
    }

    #[test]
    fn test_from_slice_beyond_last_page() {
        let all: Vec<i32> = (1..=25).collect();
        let page = PageResult::from_slice(&all, PageRequest::new(9));
        assert!(page.is_empty());
        assert_eq!(page.current_page(), 9);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let page = PageResult::from_slice(&["a"], PageRequest::first());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["items"][0], "a");
    }
}
