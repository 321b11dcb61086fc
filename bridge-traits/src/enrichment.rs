//! Derivative-filter enrichment.

use crate::readiness::Readiness;
use core_library::BookFilter;

/// Rewrites or augments a filter before it is sent to the search service,
/// e.g. expanding a derivative-tag shorthand into the underlying tag set.
///
/// `Pending` means the data the rewrite depends on is still loading; the
/// composer then uses its pre-enrichment filter for the current pass.
pub trait DerivativeFilterProvider: Send + Sync {
    fn process(&self, filter: &BookFilter) -> Readiness<BookFilter>;
}

/// Enrichment step that passes every filter through untouched. Useful for
/// views that have no derivative handling and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDerivativeFilters;

impl DerivativeFilterProvider for NoDerivativeFilters {
    fn process(&self, filter: &BookFilter) -> Readiness<BookFilter> {
        Readiness::Ready(filter.clone())
    }
}
