//! Collection narrowing from URL filter segments.
//!
//! A subset page URL carries slash-delimited `kind:value` segments after
//! the collection name, e.g. `level:2/topic:animals/search:dogs%20cats`.
//! Applied left-to-right they derive a narrowed collection; a trailing
//! `skip:n` pages through the parent collection instead of narrowing it.

use tracing::{debug, warn};

use core_library::{BookFilter, Collection};

/// A narrowed collection plus the pagination offset the segments asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSubset {
    pub collection: Collection,
    pub skip: usize,
}

/// How the caller should break up a subset page's books, given which
/// narrowings are already in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetBreakdown {
    /// Default: group rows by reading level.
    ByLevel,
    /// Level already narrowed; group by topic instead.
    ByTopic,
    /// Level and topic both narrowed; show one flat list.
    Flat,
}

/// Apply `kind:value` narrowing segments to a collection, left-to-right.
///
/// Recognized kinds are `level`, `topic`, `search`, and `skip`. Unknown
/// kinds are ignored so older clients keep working against newer URLs. An
/// empty segment list returns the collection unchanged with skip 0.
///
/// A `search` segment is percent-decoded and applied against the original
/// collection's identity (its url key) while keeping the narrowings
/// accumulated so far. A malformed `skip` value is reported and treated
/// as 0.
pub fn generate_collection_from_filters(
    collection: &Collection,
    segments: &[String],
) -> CollectionSubset {
    let mut narrowed = collection.clone();
    let mut skip = 0;
    for segment in segments {
        let Some((kind, value)) = segment.split_once(':') else {
            debug!(%segment, "ignoring malformed filter segment");
            continue;
        };
        match kind {
            "level" => narrowed = make_collection_for_level(&narrowed, value),
            "topic" => narrowed = make_collection_for_topic(&narrowed, value),
            "search" => {
                let decoded = decode_segment(value);
                narrowed = make_collection_for_search(collection, &decoded, &narrowed);
            }
            "skip" => match value.parse::<usize>() {
                Ok(n) => skip = n,
                Err(_) => {
                    // Clamp to the first page rather than failing the view.
                    warn!(%value, "malformed skip segment; using 0");
                    skip = 0;
                }
            },
            _ => {
                debug!(%kind, "ignoring unrecognized filter segment kind");
            }
        }
    }
    CollectionSubset {
        collection: narrowed,
        skip,
    }
}

/// Narrow a collection to one reading level by adding a `level:` term to
/// its search text.
pub fn make_collection_for_level(collection: &Collection, level: &str) -> Collection {
    let mut filter = collection.filter.clone().unwrap_or_default();
    append_search_term(&mut filter, &format!("level:{level}"));
    Collection {
        url_key: format!("{}/level:{}", collection.url_key, level),
        label: format!("Level {level}"),
        filter: Some(filter),
        layout: collection.layout,
    }
}

/// Narrow a collection to one topic.
pub fn make_collection_for_topic(collection: &Collection, topic: &str) -> Collection {
    let mut filter = collection.filter.clone().unwrap_or_default();
    filter.topic = Some(topic.to_string());
    Collection {
        url_key: format!("{}/topic:{}", collection.url_key, topic),
        label: format!("{} - {}", collection.label, topic),
        filter: Some(filter),
        layout: collection.layout,
    }
}

/// Narrow by free-text search. The derived url key is anchored on the
/// *original* collection so the search reads as a subset of it, while the
/// filter keeps every narrowing already applied to `current`.
pub fn make_collection_for_search(
    original: &Collection,
    search: &str,
    current: &Collection,
) -> Collection {
    let mut filter = current.filter.clone().unwrap_or_default();
    append_search_term(&mut filter, search);
    Collection {
        url_key: format!("{}/:search:{}", original.url_key, search),
        label: current.label.clone(),
        filter: Some(filter),
        layout: current.layout,
    }
}

/// Pick how to subdivide a subset page: by level until a level is chosen,
/// then by topic, then flat.
pub fn next_breakdown(collection_name: &str, segments: &[String]) -> SubsetBreakdown {
    let haystack = format!("{}{}", collection_name, segments.join("/"));
    if haystack.contains("level:") {
        if haystack.contains("topic:") {
            SubsetBreakdown::Flat
        } else {
            SubsetBreakdown::ByTopic
        }
    } else {
        SubsetBreakdown::ByLevel
    }
}

fn append_search_term(filter: &mut BookFilter, term: &str) {
    match &mut filter.search {
        Some(search) if !search.is_empty() => {
            search.push(' ');
            search.push_str(term);
        }
        _ => filter.search = Some(term.to_string()),
    }
}

fn decode_segment(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn base_collection() -> Collection {
        Collection::new("enabling-writers", "Enabling Writers")
            .with_filter(BookFilter::from_search("bookshelf:enabling-writers"))
    }

    #[test]
    fn empty_segments_return_collection_unchanged() {
        let collection = base_collection();
        let subset = generate_collection_from_filters(&collection, &[]);
        assert_eq!(subset.collection, collection);
        assert_eq!(subset.skip, 0);
    }

    #[test]
    fn level_topic_and_search_apply_left_to_right() {
        let collection = base_collection();
        let subset = generate_collection_from_filters(
            &collection,
            &segments(&["level:2", "topic:animals", "search:dogs%20cats"]),
        );
        let filter = subset.collection.filter.unwrap();
        assert_eq!(
            filter.search.as_deref(),
            Some("bookshelf:enabling-writers level:2 dogs cats")
        );
        assert_eq!(filter.topic.as_deref(), Some("animals"));
        assert_eq!(subset.skip, 0);
        assert_eq!(
            subset.collection.url_key,
            "enabling-writers/:search:dogs cats"
        );
    }

    #[test]
    fn skip_segment_pages_without_narrowing() {
        let collection = base_collection();
        let subset = generate_collection_from_filters(&collection, &segments(&["skip:40"]));
        assert_eq!(subset.collection, collection);
        assert_eq!(subset.skip, 40);
    }

    #[test]
    fn malformed_skip_clamps_to_zero() {
        let collection = base_collection();
        let subset = generate_collection_from_filters(&collection, &segments(&["skip:forty"]));
        assert_eq!(subset.skip, 0);
    }

    #[test]
    fn unrecognized_kinds_are_ignored() {
        let collection = base_collection();
        let subset = generate_collection_from_filters(
            &collection,
            &segments(&["keyword:water", "level:1"]),
        );
        let filter = subset.collection.filter.unwrap();
        assert_eq!(
            filter.search.as_deref(),
            Some("bookshelf:enabling-writers level:1")
        );
    }

    #[test]
    fn segment_without_colon_is_ignored() {
        let collection = base_collection();
        let subset = generate_collection_from_filters(&collection, &segments(&["level"]));
        assert_eq!(subset.collection, collection);
    }

    #[test]
    fn level_narrowing_starts_filter_when_collection_has_none() {
        let collection = Collection::new("root", "Root");
        let narrowed = make_collection_for_level(&collection, "3");
        assert_eq!(narrowed.filter.unwrap().search.as_deref(), Some("level:3"));
        assert_eq!(narrowed.url_key, "root/level:3");
        assert_eq!(narrowed.label, "Level 3");
    }

    #[test]
    fn breakdown_progresses_level_topic_flat() {
        assert_eq!(next_breakdown("animals", &[]), SubsetBreakdown::ByLevel);
        assert_eq!(
            next_breakdown("animals", &segments(&["level:2"])),
            SubsetBreakdown::ByTopic
        );
        assert_eq!(
            next_breakdown("animals", &segments(&["level:2", "topic:farming"])),
            SubsetBreakdown::Flat
        );
        // A level baked into the collection name itself also counts.
        assert_eq!(
            next_breakdown("animals/level:1", &[]),
            SubsetBreakdown::ByTopic
        );
    }
}
