//! Book search service abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use core_library::{BasicBookInfo, BookFilter};

/// One sort criterion for grid queries, applied in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSortOrder {
    pub column_name: String,
    pub descending: bool,
}

/// Options controlling a search request beyond the filter itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Ask the backend to embed each book's full language list. The
    /// by-language view needs this; the grid does not.
    pub include_language_details: bool,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub sortings: Vec<BookSortOrder>,
}

impl SearchOptions {
    /// Options for the by-language view: every match, with language lists.
    pub fn with_language_details() -> Self {
        Self {
            include_language_details: true,
            ..Self::default()
        }
    }
}

/// A flat list of matches plus the backend's total count.
///
/// `total_count` covers all matches, not just the window selected by
/// `limit`/`skip`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSearchResults {
    pub books: Vec<BasicBookInfo>,
    pub total_count: u64,
}

/// The book search service.
///
/// Eventually consistent; no transactional guarantees. Results for the same
/// filter may differ between calls as uploads land.
#[async_trait]
pub trait BookSearch: Send + Sync {
    async fn search_books(
        &self,
        filter: &BookFilter,
        options: &SearchOptions,
    ) -> Result<BookSearchResults>;

    /// Total number of books matching the filter.
    async fn count_books(&self, filter: &BookFilter) -> Result<u64>;
}
