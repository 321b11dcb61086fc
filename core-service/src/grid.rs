//! The administrative grid view.

use tracing::debug;

use bridge_traits::{BookSortOrder, Readiness, SearchOptions};
use core_browse::{book_grid_columns, compose_grid_filter, GridColumn, GridColumnFilter};
use core_library::{BasicBookInfo, BookFilter, Page, PageRequest};

use crate::error::Result;
use crate::BrowseDependencies;

/// The grid shows this many books per page.
pub const BOOKS_PER_GRID_PAGE: u32 = 20;

/// Composes grid filters and fetches pages of matching books.
///
/// `compose` is synchronous and safe to call on every render; only the
/// fetching methods touch the network.
pub struct GridQueryService {
    deps: BrowseDependencies,
    columns: Vec<GridColumn>,
}

impl GridQueryService {
    /// A grid service over the standard book grid columns.
    pub fn new(deps: BrowseDependencies) -> Self {
        Self::with_columns(deps, book_grid_columns())
    }

    /// A grid service with a custom column table, for grids other than the
    /// book grid.
    pub fn with_columns(deps: BrowseDependencies, columns: Vec<GridColumn>) -> Self {
        Self { deps, columns }
    }

    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    /// Compose the page-context filter and the current column filters into
    /// the query filter for this pass. While the language catalog is still
    /// loading it is treated as empty, which leaves language filter text
    /// unresolved for this pass.
    pub fn compose(&self, base: &BookFilter, grid_filters: &[GridColumnFilter]) -> BookFilter {
        let languages = match self.deps.language_catalog.languages_by_book_count() {
            Readiness::Ready(languages) => languages,
            Readiness::Pending => {
                debug!("language catalog still loading; composing without it");
                Vec::new()
            }
        };
        compose_grid_filter(
            base,
            grid_filters,
            &self.columns,
            &languages,
            self.deps.collections.as_ref(),
            self.deps.derivative_filters.as_ref(),
        )
    }

    /// One page of books matching the filter, with the backend's total
    /// match count.
    pub async fn books_for_grid(
        &self,
        filter: &BookFilter,
        page_request: PageRequest,
        sortings: &[BookSortOrder],
    ) -> Result<Page<BasicBookInfo>> {
        let options = SearchOptions {
            include_language_details: false,
            limit: Some(page_request.limit()),
            skip: Some(page_request.offset()),
            sortings: sortings.to_vec(),
        };
        let results = self.deps.book_search.search_books(filter, &options).await?;
        Ok(Page::new(results.books, results.total_count, page_request))
    }

    /// Total number of books matching the filter.
    pub async fn book_count(&self, filter: &BookFilter) -> Result<u64> {
        Ok(self.deps.book_search.count_books(filter).await?)
    }
}
