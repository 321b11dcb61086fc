//! The normalized query filter sent to the book search service.

use serde::{Deserialize, Serialize};

/// Search strings beginning with this case-insensitive prefix are references
/// to a named collection rather than free text. Once the collection is
/// resolved, its stored filter replaces the working filter wholesale.
pub const COLLECTION_SEARCH_PREFIX: &str = "collection:";

/// Three-state constraint for boolean book properties.
///
/// `All` is the "include everything" sentinel: the administrative grid forces
/// it onto circulation and draft status so that moderators see every book
/// regardless of publication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOption {
    Yes,
    No,
    All,
}

/// A set of optional constraints on a book query.
///
/// Absent fields mean "unconstrained". The filter is ephemeral: it is
/// recomputed from UI state on every relevant change and never mutated in
/// place by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookFilter {
    pub language: Option<String>,
    pub publisher: Option<String>,
    pub bookshelf: Option<String>,
    pub feature: Option<String>,
    pub topic: Option<String>,
    pub bookshelf_category: Option<String>,
    pub other_tags: Option<String>,
    pub in_circulation: Option<BooleanOption>,
    pub draft: Option<BooleanOption>,
    pub search: Option<String>,
}

impl BookFilter {
    /// A filter constrained only by a free-text search string.
    pub fn from_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }
}

/// Extract the collection name from a search string of the form
/// `collection:<name>`. The prefix match is case-insensitive; the remainder
/// is returned verbatim.
pub fn collection_reference(search: &str) -> Option<&str> {
    let prefix = search.get(..COLLECTION_SEARCH_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(COLLECTION_SEARCH_PREFIX) {
        Some(&search[COLLECTION_SEARCH_PREFIX.len()..])
    } else {
        None
    }
}
