//! Pagination helpers for the administrative grid.

use serde::{Deserialize, Serialize};

/// A zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Number of items to skip before this page starts.
    pub fn offset(&self) -> u32 {
        self.page * self.page_size
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        // The grid shows 20 books per page.
        Self { page: 0, page_size: 20 }
    }
}

/// One page of results plus the total match count the backend reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matches across all pages, not just this one.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
        }
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page + 1) * u64::from(self.page_size) < self.total
    }
}
