//! Filter composition for the administrative grid.
//!
//! Combines the page-context filter (which may reference a named collection
//! via a `collection:` search string) with the per-column grid filters into
//! one normalized [`BookFilter`]. Pure and synchronous: pending
//! collaborators make the composer fall back to the un-enriched filter for
//! the current pass, and the caller re-invokes once they settle.

use tracing::{error, warn};

use bridge_traits::{CollectionProvider, DerivativeFilterProvider, Readiness};
use core_library::{collection_reference, BookFilter, BooleanOption, Language};

use crate::columns::{find_column, FilterOperation, GridColumn, GridColumnFilter};
use crate::langmatch::best_language_match;

/// Compose the query filter for one grid render pass.
///
/// Steps, in order:
/// 1. Percent-decode `base`'s search text once (callers may hand it over
///    still encoded from the URL bar).
/// 2. A `collection:<name>` search string is resolved through
///    `collections`; a resolved collection filter *replaces* the working
///    filter. While resolution is pending, the decoded original is used.
/// 3. The derivative-filter step may rewrite the working filter; while it
///    is pending, the pre-resolution filter is used.
/// 4. Circulation and draft status are forced to the include-all sentinel:
///    the grid shows every book, and only the column filters narrow it.
/// 5. Each column filter folds its value in via the column's merge
///    function. The language column's text is first resolved against the
///    catalog; an unmatched value is kept raw and will match nothing.
///
/// `base` is never mutated; the result is a fresh filter each call.
pub fn compose_grid_filter(
    base: &BookFilter,
    grid_filters: &[GridColumnFilter],
    columns: &[GridColumn],
    languages: &[Language],
    collections: &dyn CollectionProvider,
    derivatives: &dyn DerivativeFilterProvider,
) -> BookFilter {
    let mut decoded = base.clone();
    if let Some(search) = decoded.search.take() {
        decoded.search = Some(decode_once(&search));
    }

    // Steps 2 and 3 both fall back to this on a pending collaborator.
    let original = decoded.clone();

    let mut working = decoded;
    if let Some(name) = working.search.as_deref().and_then(collection_reference) {
        match collections.collection(name) {
            Readiness::Ready(Some(collection)) => {
                if let Some(filter) = collection.filter {
                    working = filter;
                }
            }
            // An unknown name behaves as if no collection filter existed.
            Readiness::Ready(None) => {}
            Readiness::Pending => {}
        }
    }

    match derivatives.process(&working) {
        Readiness::Ready(processed) => working = processed,
        Readiness::Pending => {
            // Still loading: use the original search filter so nothing
            // errors mid-render. Composition runs again as things settle.
            working = original;
        }
    }

    working.in_circulation = Some(BooleanOption::All);
    working.draft = Some(BooleanOption::All);

    for grid_filter in grid_filters {
        if grid_filter.value.is_empty() {
            continue;
        }
        if grid_filter.operation != FilterOperation::Contains {
            error!(
                column = %grid_filter.column_name,
                operation = ?grid_filter.operation,
                "cannot yet filter using this operation"
            );
            continue;
        }
        let Some(column) = find_column(columns, &grid_filter.column_name) else {
            warn!(column = %grid_filter.column_name, "grid filter names an unknown column");
            continue;
        };
        if !column.filterable {
            warn!(column = %column.name, "grid filter on a non-filterable column");
            continue;
        }

        // Merge functions may append to the search text; make sure there is
        // something to append to.
        if working.search.is_none() {
            working.search = Some(String::new());
        }

        let mut target = grid_filter.value.clone();
        if column.name == "languages" {
            // Same matching the language chooser uses, but here only the
            // best match counts.
            if let Some(language) = best_language_match(languages, &target) {
                target = language.iso_code.clone();
            }
            // No match: keep the raw text, which will yield "no data"
            // downstream rather than matching everything.
        }

        match column.add_to_filter {
            Some(add_to_filter) => add_to_filter(&mut working, &target),
            None => {
                warn!(column = %column.name, "filterable column has no merge function; skipping");
            }
        }
    }

    working
}

/// Percent-decode, keeping the raw text when the encoding is malformed.
fn decode_once(search: &str) -> String {
    match urlencoding::decode(search) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => search.to_string(),
    }
}
