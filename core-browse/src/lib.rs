//! # Browse Core
//!
//! The algorithmic heart of the library browsing front-end.
//!
//! ## Overview
//!
//! Three cooperating pieces, all pure functions of their inputs:
//!
//! - **Filter composition** ([`composer`]): merges the page-context filter,
//!   per-column grid filters, and named collection references into one
//!   normalized [`BookFilter`](core_library::BookFilter) for the search
//!   service.
//! - **Language grouping** ([`grouping`]): buckets flat search results per
//!   language with slot-priority deduplication, one bucket per display row.
//! - **Subset narrowing** ([`subset`]): derives a narrowed collection from
//!   slash-delimited `kind:value` URL segments.
//!
//! Everything here is synchronous and side-effect-free; pending
//! collaborators surface as [`Readiness::Pending`](bridge_traits::Readiness)
//! and the caller re-invokes once they settle.

pub mod columns;
pub mod composer;
pub mod grouping;
pub mod langmatch;
pub mod subset;

pub use columns::{book_grid_columns, find_column, FilterOperation, GridColumn, GridColumnFilter};
pub use composer::compose_grid_filter;
pub use grouping::{
    group_books_by_language, languages_with_books, LanguageGroups, DEFAULT_MAX_LANGUAGE_SLOTS,
};
pub use langmatch::best_language_match;
pub use subset::{
    generate_collection_from_filters, make_collection_for_level, make_collection_for_search,
    make_collection_for_topic, next_breakdown, CollectionSubset, SubsetBreakdown,
};
