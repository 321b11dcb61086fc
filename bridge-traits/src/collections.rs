//! Collection resolution.

use crate::readiness::Readiness;
use core_library::Collection;

/// Resolves a collection name to its definition.
///
/// Backed by the content backend. Implementations typically cache a session
/// snapshot and report `Pending` while the initial load is in flight;
/// `Ready(None)` means the load finished and no such collection exists.
pub trait CollectionProvider: Send + Sync {
    fn collection(&self, url_key: &str) -> Readiness<Option<Collection>>;
}
