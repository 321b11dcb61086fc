//! The by-language view: one row per language with representative books.

use std::sync::Arc;

use bridge_traits::{BookSearch, LanguageCatalogSource, Readiness, SearchOptions};
use core_browse::{
    group_books_by_language, languages_with_books, LanguageGroups, DEFAULT_MAX_LANGUAGE_SLOTS,
};
use core_library::{BookFilter, Language};

use crate::error::Result;

/// Grouped results for one filter, ready to render as language rows.
#[derive(Debug, Clone, Default)]
pub struct LanguageRows {
    pub groups: LanguageGroups,
    /// Catalog entries with at least one book, in display order. Empty
    /// while the catalog is still loading even if `groups` has buckets.
    pub languages: Vec<Language>,
}

impl LanguageRows {
    /// The "X books in Y languages" numbers: total placements made and
    /// distinct languages present.
    pub fn summary(&self) -> (usize, usize) {
        (self.groups.total_assignments, self.groups.language_count())
    }
}

/// Runs a search and buckets the results per language.
pub struct LanguageRowsService {
    book_search: Arc<dyn BookSearch>,
    language_catalog: Arc<dyn LanguageCatalogSource>,
}

impl LanguageRowsService {
    pub fn new(
        book_search: Arc<dyn BookSearch>,
        language_catalog: Arc<dyn LanguageCatalogSource>,
    ) -> Self {
        Self {
            book_search,
            language_catalog,
        }
    }

    /// Search with language details included, then group. Grouping is
    /// recomputed from scratch on every call; there is no incremental
    /// update to invalidate.
    pub async fn rows_for_filter(&self, filter: &BookFilter) -> Result<LanguageRows> {
        let results = self
            .book_search
            .search_books(filter, &SearchOptions::with_language_details())
            .await?;
        let groups = group_books_by_language(&results.books, DEFAULT_MAX_LANGUAGE_SLOTS);
        let languages = match self.language_catalog.languages_by_book_count() {
            Readiness::Ready(catalog) => languages_with_books(&catalog, &groups)
                .into_iter()
                .cloned()
                .collect(),
            Readiness::Pending => Vec::new(),
        };
        Ok(LanguageRows { groups, languages })
    }
}
