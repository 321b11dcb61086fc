//! # Browse Service Façade
//!
//! Wires backend collaborators into the browsing core and exposes the two
//! views the front-end renders: the administrative grid and the by-language
//! rows. Hosts construct a [`BrowseDependencies`] bundle from their
//! collaborator implementations and hand it to the services here.
//!
//! The services own no state beyond the collaborator handles; every query
//! recomputes from current inputs, so callers can re-invoke freely as
//! collaborators settle.

pub mod error;
pub mod grid;
pub mod language_rows;

pub use error::{CoreError, Result};
pub use grid::{GridQueryService, BOOKS_PER_GRID_PAGE};
pub use language_rows::{LanguageRows, LanguageRowsService};

use std::sync::Arc;

use bridge_traits::{
    BookSearch, CollectionProvider, DerivativeFilterProvider, LanguageCatalogSource,
};

/// Aggregated handle to every collaborator the browsing core requires.
#[derive(Clone)]
pub struct BrowseDependencies {
    pub collections: Arc<dyn CollectionProvider>,
    pub derivative_filters: Arc<dyn DerivativeFilterProvider>,
    pub language_catalog: Arc<dyn LanguageCatalogSource>,
    pub book_search: Arc<dyn BookSearch>,
}

impl BrowseDependencies {
    /// Construct a dependency bundle from explicit collaborator handles.
    pub fn new(
        collections: Arc<dyn CollectionProvider>,
        derivative_filters: Arc<dyn DerivativeFilterProvider>,
        language_catalog: Arc<dyn LanguageCatalogSource>,
        book_search: Arc<dyn BookSearch>,
    ) -> Self {
        Self {
            collections,
            derivative_filters,
            language_catalog,
            book_search,
        }
    }
}
