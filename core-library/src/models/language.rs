//! The reference language catalog.

use serde::{Deserialize, Serialize};

/// One entry in the language catalog.
///
/// Loaded once per session from the search backend; immutable reference
/// data used for sorted display and for matching column-filter text to a
/// language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub iso_code: String,
    /// Autonym: the language's name for itself.
    pub name: String,
    pub english_name: Option<String>,
    /// Number of books in this language, used to order the catalog.
    pub usage_count: i64,
}

impl Language {
    pub fn new(iso_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_english_name(mut self, english_name: impl Into<String>) -> Self {
        self.english_name = Some(english_name.into());
        self
    }

    /// Display strings derived from the autonym and english name.
    pub fn names(&self) -> LanguageNames {
        let english = self.english_name.as_deref().unwrap_or(&self.name);
        let display_name_with_autonym = if english == self.name {
            self.name.clone()
        } else {
            format!("{} ({})", english, self.name)
        };
        LanguageNames {
            display_name: english.to_string(),
            display_name_with_autonym,
        }
    }
}

/// Display-ready names for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageNames {
    pub display_name: String,
    /// English name with the autonym in parentheses when they differ,
    /// e.g. "French (français)".
    pub display_name_with_autonym: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_include_autonym_when_it_differs() {
        let lang = Language::new("fr", "français").with_english_name("French");
        let names = lang.names();
        assert_eq!(names.display_name, "French");
        assert_eq!(names.display_name_with_autonym, "French (français)");
    }

    #[test]
    fn names_collapse_when_autonym_matches() {
        let lang = Language::new("en", "English").with_english_name("English");
        assert_eq!(lang.names().display_name_with_autonym, "English");
    }

    #[test]
    fn missing_english_name_falls_back_to_autonym() {
        let lang = Language::new("haw", "ʻŌlelo Hawaiʻi");
        assert_eq!(lang.names().display_name, "ʻŌlelo Hawaiʻi");
        assert_eq!(lang.names().display_name_with_autonym, "ʻŌlelo Hawaiʻi");
    }
}
