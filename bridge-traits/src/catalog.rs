//! Language catalog access.

use crate::readiness::Readiness;
use core_library::Language;

/// Supplies the reference list of languages, ordered by book count.
///
/// The catalog is loaded once per session; `Pending` is only seen during
/// that initial load. Consumers treat a pending catalog as empty for the
/// current pass.
pub trait LanguageCatalogSource: Send + Sync {
    fn languages_by_book_count(&self) -> Readiness<Vec<Language>>;
}

/// A catalog held fully in memory, for hosts that fetch it up front and
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLanguageCatalog {
    languages: Vec<Language>,
}

impl StaticLanguageCatalog {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }
}

impl LanguageCatalogSource for StaticLanguageCatalog {
    fn languages_by_book_count(&self) -> Readiness<Vec<Language>> {
        Readiness::Ready(self.languages.clone())
    }
}
