//! Grid column descriptors and per-column filter state.
//!
//! The grid host passes the column table into filter composition explicitly;
//! there is no global column registry. Each filterable column carries the
//! merge function that knows how to fold its text value into a
//! [`BookFilter`].

use core_library::BookFilter;
use serde::{Deserialize, Serialize};

/// Comparison operation attached to a grid column filter.
///
/// The grid UI offers several, but the query side only implements
/// `Contains`; composition surfaces anything else as an error and drops the
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperation {
    Contains,
    Equal,
    StartsWith,
    EndsWith,
}

/// The filter state of one grid column: which column, how to compare, and
/// the text the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumnFilter {
    pub column_name: String,
    pub operation: FilterOperation,
    pub value: String,
}

impl GridColumnFilter {
    pub fn contains(column_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            operation: FilterOperation::Contains,
            value: value.into(),
        }
    }
}

/// Merge function folding one column's resolved filter text into the
/// working filter.
pub type AddToFilter = fn(&mut BookFilter, &str);

/// Static description of one grid column.
pub struct GridColumn {
    pub name: &'static str,
    pub default_visible: bool,
    pub moderator_only: bool,
    pub sorting_enabled: bool,
    /// Whether the column shows a filter cell at all.
    pub filterable: bool,
    /// How to fold the filter text into the query. A filterable column may
    /// lack one while query support is being worked out; composition logs
    /// and skips it.
    pub add_to_filter: Option<AddToFilter>,
}

impl GridColumn {
    fn display_only(name: &'static str) -> Self {
        Self {
            name,
            default_visible: false,
            moderator_only: false,
            sorting_enabled: false,
            filterable: false,
            add_to_filter: None,
        }
    }

    fn filterable(name: &'static str, add_to_filter: AddToFilter) -> Self {
        Self {
            name,
            default_visible: false,
            moderator_only: false,
            sorting_enabled: false,
            filterable: true,
            add_to_filter: Some(add_to_filter),
        }
    }
}

/// Find a column by name.
pub fn find_column<'a>(columns: &'a [GridColumn], name: &str) -> Option<&'a GridColumn> {
    columns.iter().find(|c| c.name == name)
}

/// The column table for the book grid.
pub fn book_grid_columns() -> Vec<GridColumn> {
    vec![
        GridColumn {
            default_visible: true,
            sorting_enabled: true,
            ..GridColumn::filterable("title", |f, value| {
                append_search_term(f, &format!("title:\"{}\"", value));
            })
        },
        GridColumn {
            default_visible: true,
            ..GridColumn::filterable("languages", |f, value| {
                f.language = Some(value.to_string());
            })
        },
        GridColumn {
            default_visible: true,
            ..GridColumn::filterable("topic", |f, value| {
                f.topic = Some(value.to_string());
            })
        },
        GridColumn::filterable("bookshelf", |f, value| {
            f.bookshelf = Some(value.to_string());
        }),
        GridColumn {
            sorting_enabled: true,
            ..GridColumn::filterable("publisher", |f, value| {
                f.publisher = Some(value.to_string());
            })
        },
        GridColumn::filterable("features", |f, value| {
            f.feature = Some(value.to_string());
        }),
        GridColumn::filterable("tags", |f, value| {
            f.other_tags = Some(value.to_string());
        }),
        GridColumn::filterable("bookshelfCategory", |f, value| {
            f.bookshelf_category = Some(value.to_string());
        }),
        // Uploader filtering needs a relational query the search backend
        // does not expose yet, so the column is filterable in the UI but
        // has no merge function.
        GridColumn {
            moderator_only: true,
            filterable: true,
            ..GridColumn::display_only("uploader")
        },
        GridColumn {
            default_visible: true,
            sorting_enabled: true,
            ..GridColumn::display_only("creationDate")
        },
        GridColumn {
            moderator_only: true,
            ..GridColumn::display_only("incirculation")
        },
    ]
}

/// Append a term to the filter's search text, space-separated.
fn append_search_term(filter: &mut BookFilter, term: &str) {
    let search = filter.search.get_or_insert_with(String::new);
    if !search.is_empty() {
        search.push(' ');
    }
    search.push_str(term);
}
