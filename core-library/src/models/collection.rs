//! Named collections supplied by the content backend.

use crate::models::filter::BookFilter;
use serde::{Deserialize, Serialize};

/// How a collection prefers its books to be broken up for display.
///
/// The value comes from the content backend; the presentation layer switches
/// on it to pick a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionLayout {
    #[default]
    ByTopic,
    NoBooks,
    AllBooks,
    ByLevel,
    ByLanguage,
}

/// A named, possibly filter-bearing grouping of books.
///
/// Collections are resolved by name through the content backend and may
/// carry a filter that cannot be expressed with column filters or search
/// text alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collection {
    /// Stable key used in URLs; subset narrowing appends `kind:value`
    /// segments to it.
    pub url_key: String,
    /// Human-readable label.
    pub label: String,
    pub filter: Option<BookFilter>,
    pub layout: CollectionLayout,
}

impl Collection {
    pub fn new(url_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url_key: url_key.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: BookFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_deserializes_from_kebab_case() {
        let layout: CollectionLayout = serde_json::from_str("\"by-language\"").unwrap();
        assert_eq!(layout, CollectionLayout::ByLanguage);
        let layout: CollectionLayout = serde_json::from_str("\"no-books\"").unwrap();
        assert_eq!(layout, CollectionLayout::NoBooks);
    }

    #[test]
    fn default_layout_is_by_topic() {
        let collection: Collection = serde_json::from_str("{\"urlKey\":\"fables\"}").unwrap();
        assert_eq!(collection.layout, CollectionLayout::ByTopic);
    }
}
