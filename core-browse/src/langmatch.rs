//! Ranked matching of free text against the language catalog.
//!
//! The same matching the language chooser uses, reduced to "pick the single
//! best entry": a column filter like "franc" should land on French rather
//! than require the user to know the iso code.

use core_library::Language;

/// How well a key matched, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    Equals,
    Prefix,
    WordPrefix,
    Contains,
}

fn rank_key(key: &str, query: &str) -> Option<MatchRank> {
    let key = key.to_lowercase();
    if key == query {
        return Some(MatchRank::Equals);
    }
    if key.starts_with(query) {
        return Some(MatchRank::Prefix);
    }
    if key.split_whitespace().any(|word| word.starts_with(query)) {
        return Some(MatchRank::WordPrefix);
    }
    if key.contains(query) {
        return Some(MatchRank::Contains);
    }
    None
}

fn rank_language(language: &Language, query: &str) -> Option<MatchRank> {
    // Keys in priority order: english name, autonym, iso code.
    [
        language.english_name.as_deref().unwrap_or_default(),
        language.name.as_str(),
        language.iso_code.as_str(),
    ]
    .iter()
    .filter_map(|key| rank_key(key, query))
    .min()
}

/// The catalog entry best matching the query, or `None` when nothing in the
/// catalog matches at all. Ties at the same rank keep the earlier catalog
/// entry, so a catalog ordered by book count prefers widely used languages.
pub fn best_language_match<'a>(languages: &'a [Language], query: &str) -> Option<&'a Language> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    languages
        .iter()
        .filter_map(|language| rank_language(language, &query).map(|rank| (rank, language)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, language)| language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Language> {
        vec![
            Language::new("en", "English").with_english_name("English"),
            Language::new("fr", "français").with_english_name("French"),
            Language::new("frr", "Nordfriisk").with_english_name("Northern Frisian"),
            Language::new("es", "español").with_english_name("Spanish"),
            Language::new("hac", "گورانی").with_english_name("Gurani"),
        ]
    }

    #[test]
    fn exact_iso_code_wins() {
        let languages = catalog();
        let matched = best_language_match(&languages, "fr").unwrap();
        assert_eq!(matched.iso_code, "fr");
    }

    #[test]
    fn english_name_prefix_matches() {
        let languages = catalog();
        let matched = best_language_match(&languages, "spa").unwrap();
        assert_eq!(matched.iso_code, "es");
    }

    #[test]
    fn autonym_matches_too() {
        let languages = catalog();
        let matched = best_language_match(&languages, "español").unwrap();
        assert_eq!(matched.iso_code, "es");
    }

    #[test]
    fn exact_beats_prefix() {
        let languages = catalog();
        let matched = best_language_match(&languages, "french").unwrap();
        assert_eq!(matched.iso_code, "fr");
    }

    #[test]
    fn ties_keep_catalog_order() {
        // Both english names prefix-match "af"; the earlier entry wins.
        let languages = vec![
            Language::new("aa", "Qafar").with_english_name("Afar"),
            Language::new("ab", "аԥсшәа").with_english_name("Afrikaans"),
        ];
        let matched = best_language_match(&languages, "af").unwrap();
        assert_eq!(matched.iso_code, "aa");
    }

    #[test]
    fn no_match_returns_none() {
        let languages = catalog();
        assert!(best_language_match(&languages, "klingon").is_none());
        assert!(best_language_match(&languages, "").is_none());
        assert!(best_language_match(&languages, "   ").is_none());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let languages = catalog();
        let matched = best_language_match(&languages, "FRENCH").unwrap();
        assert_eq!(matched.iso_code, "fr");
    }
}
