//! Book summaries as returned by the search service.

use serde::{Deserialize, Serialize};

/// The slice of book metadata the browsing core needs.
///
/// `languages` is ordered: the position of a language code is its priority
/// for that book, and the grouping engine processes position 0 for every
/// book before considering position 1 for any book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicBookInfo {
    pub id: String,
    pub title: String,
    /// Perceptual hash of the book's first content image. Used as a
    /// duplicate-detection key; uploads predating the hashing pipeline
    /// have none.
    pub phash_of_first_content_image: Option<String>,
    /// Language codes associated with the book, in priority order.
    pub languages: Vec<String>,
}

impl BasicBookInfo {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Language code at the given priority slot, if the book has that many.
    pub fn language_at(&self, slot: usize) -> Option<&str> {
        self.languages.get(slot).map(String::as_str)
    }
}
