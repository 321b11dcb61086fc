//! Per-language grouping of search results.
//!
//! The by-language view shows one row per language, each row holding a
//! deduplicated list of representative books. Grouping is a slot-priority
//! scan, not a plain group-by: slot 0 of every book is processed before
//! slot 1 of any book, so buckets are dominated by primary-language
//! assignments and secondary languages only fill remaining gaps.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use core_library::{BasicBookInfo, Language};

/// No book realistically carries more language slots than this.
pub const DEFAULT_MAX_LANGUAGE_SLOTS: usize = 20;

/// The result of one grouping pass: language code → insertion-ordered
/// bucket of representative books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageGroups {
    buckets: HashMap<String, Vec<BasicBookInfo>>,
    /// Number of placements made. A book placed into two language buckets
    /// counts twice; this is not a book count.
    pub total_assignments: usize,
}

impl LanguageGroups {
    /// The bucket for one language code, if any book landed there.
    pub fn bucket(&self, iso_code: &str) -> Option<&[BasicBookInfo]> {
        self.buckets.get(iso_code).map(Vec::as_slice)
    }

    /// Number of distinct languages with at least one book.
    pub fn language_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// A book is "already represented" in a bucket when an entry shares its
    /// content fingerprint, or when any entry has no fingerprint at all
    /// (fingerprint-less books would otherwise pile up together).
    fn already_represented(bucket: &[BasicBookInfo], book: &BasicBookInfo) -> bool {
        bucket.iter().any(|existing| {
            existing.phash_of_first_content_image == book.phash_of_first_content_image
                || existing.phash_of_first_content_image.is_none()
        })
    }
}

/// Group books per language with slot-priority deduplication.
///
/// For each slot index below `max_language_slots_per_book`, every book (in
/// input order) offers the language at that slot of its priority list.
/// The first book to mention a language opens the bucket; later books join
/// only if not already represented there. The whole structure is rebuilt
/// from scratch on every call; callers re-run it whenever the book list
/// changes.
pub fn group_books_by_language(
    books: &[BasicBookInfo],
    max_language_slots_per_book: usize,
) -> LanguageGroups {
    let mut groups = LanguageGroups::default();
    for slot in 0..max_language_slots_per_book {
        for book in books {
            let Some(language) = book.language_at(slot) else {
                continue;
            };
            match groups.buckets.entry(language.to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(vec![book.clone()]);
                    groups.total_assignments += 1;
                }
                Entry::Occupied(mut entry) => {
                    if !LanguageGroups::already_represented(entry.get(), book) {
                        entry.get_mut().push(book.clone());
                        groups.total_assignments += 1;
                    }
                }
            }
        }
    }
    debug!(
        books = books.len(),
        assignments = groups.total_assignments,
        languages = groups.language_count(),
        "grouped books by language"
    );
    groups
}

/// Catalog entries that actually have a bucket, ordered by display name
/// with autonym. This is the row order the by-language view renders in.
pub fn languages_with_books<'a>(
    catalog: &'a [Language],
    groups: &LanguageGroups,
) -> Vec<&'a Language> {
    let mut present: Vec<&Language> = catalog
        .iter()
        .filter(|language| groups.bucket(&language.iso_code).is_some())
        .collect();
    present.sort_by(|a, b| {
        a.names()
            .display_name_with_autonym
            .cmp(&b.names().display_name_with_autonym)
    });
    present
}
