//! # Backend Collaborator Traits
//!
//! Contracts between the browsing core and the services that feed it.
//!
//! ## Overview
//!
//! The browsing core is pure and synchronous; everything that involves the
//! network lives behind one of these traits. Collaborators that load data
//! asynchronously (collection definitions, the language catalog, derivative
//! filter expansion) expose a poll-style API returning [`Readiness`]: the
//! core uses the value when it is ready and falls back to a safe default
//! when it is not, trusting the caller to re-invoke composition once the
//! collaborator settles. Only the book search service itself is `async`.
//!
//! ## Traits
//!
//! - [`BookSearch`](search::BookSearch) - Query the book search service
//! - [`CollectionProvider`](collections::CollectionProvider) - Resolve named collections
//! - [`DerivativeFilterProvider`](enrichment::DerivativeFilterProvider) - Rewrite/augment filters
//! - [`LanguageCatalogSource`](catalog::LanguageCatalogSource) - Supply the language catalog
//!
//! ## Error Handling
//!
//! Fallible operations use [`BridgeError`](error::BridgeError). A pending
//! collaborator is *not* an error; it is the `Readiness::Pending` state.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so collaborator handles can be shared
//! across async tasks.

pub mod catalog;
pub mod collections;
pub mod enrichment;
pub mod error;
pub mod readiness;
pub mod search;

pub use error::BridgeError;
pub use readiness::Readiness;

// Re-export commonly used types
pub use catalog::{LanguageCatalogSource, StaticLanguageCatalog};
pub use collections::CollectionProvider;
pub use enrichment::{DerivativeFilterProvider, NoDerivativeFilters};
pub use search::{BookSearch, BookSearchResults, BookSortOrder, SearchOptions};
