//! Domain models for the book library.

mod book;
mod collection;
mod filter;
mod language;

pub use book::BasicBookInfo;
pub use collection::{Collection, CollectionLayout};
pub use filter::{collection_reference, BookFilter, BooleanOption, COLLECTION_SEARCH_PREFIX};
pub use language::{Language, LanguageNames};
