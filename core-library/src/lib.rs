//! # Library Domain Models
//!
//! Shared domain types for the book library browsing core.
//!
//! ## Overview
//!
//! This crate defines:
//! - The normalized query filter sent to the book search service
//! - Book summaries as returned by search (with per-book language lists)
//! - Named collections as supplied by the content backend
//! - The reference language catalog used for display and matching
//! - Pagination helpers for the administrative grid

pub mod models;
pub mod pagination;

pub use models::{
    collection_reference, BasicBookInfo, BookFilter, BooleanOption, Collection, CollectionLayout,
    Language, LanguageNames, COLLECTION_SEARCH_PREFIX,
};
pub use pagination::{Page, PageRequest};
