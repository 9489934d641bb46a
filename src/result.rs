use crate::matcher::IdiomMatch;
use serde::{Deserialize, Serialize};

/// How a translation was produced
///
/// The serialized names are stored and displayed by callers, so they must
/// not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMethod {
    None,
    IdiomDatabase,
    IdiomDatabaseDirect,
    IdiomDatabasePartial,
    IdiomExplanation,
    IdiomAggressiveSearch,
    IdiomWordOverlap,
    IdiomPatternMatch,
    SameLanguage,
    LibreTranslate,
    LibreTranslateFallback,
    MixedIdiomApi,
    GoogleTranslateApi,
    FallbackDictionary,
}

impl TranslationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationMethod::None => "none",
            TranslationMethod::IdiomDatabase => "idiom_database",
            TranslationMethod::IdiomDatabaseDirect => "idiom_database_direct",
            TranslationMethod::IdiomDatabasePartial => "idiom_database_partial",
            TranslationMethod::IdiomExplanation => "idiom_explanation",
            TranslationMethod::IdiomAggressiveSearch => "idiom_aggressive_search",
            TranslationMethod::IdiomWordOverlap => "idiom_word_overlap",
            TranslationMethod::IdiomPatternMatch => "idiom_pattern_match",
            TranslationMethod::SameLanguage => "same_language",
            TranslationMethod::LibreTranslate => "libre_translate",
            TranslationMethod::LibreTranslateFallback => "libre_translate_fallback",
            TranslationMethod::MixedIdiomApi => "mixed_idiom_api",
            TranslationMethod::GoogleTranslateApi => "google_translate_api",
            TranslationMethod::FallbackDictionary => "fallback_dictionary",
        }
    }

    /// True for methods that resolved the text through the idiom tables
    pub fn is_idiom_based(&self) -> bool {
        matches!(
            self,
            TranslationMethod::IdiomDatabase
                | TranslationMethod::IdiomDatabaseDirect
                | TranslationMethod::IdiomDatabasePartial
                | TranslationMethod::IdiomExplanation
                | TranslationMethod::IdiomAggressiveSearch
                | TranslationMethod::IdiomWordOverlap
                | TranslationMethod::IdiomPatternMatch
        )
    }
}

impl std::fmt::Display for TranslationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one translation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub translation_method: TranslationMethod,
    /// Whether the text was treated as possibly containing idioms
    pub contains_idioms: bool,
    /// Whether an idiom was recognised
    pub is_idiom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idiom_data: Option<IdiomMatch>,
}

impl TranslationResult {
    pub fn new(translated_text: impl Into<String>, method: TranslationMethod) -> Self {
        Self {
            translated_text: translated_text.into(),
            translation_method: method,
            contains_idioms: false,
            is_idiom: false,
            idiom_data: None,
        }
    }

    /// Result for empty input
    pub fn empty() -> Self {
        Self::new(String::new(), TranslationMethod::None)
    }

    /// Attach the recognised idiom; marks the result as idiomatic
    pub fn with_idiom(mut self, idiom: IdiomMatch) -> Self {
        self.is_idiom = true;
        self.contains_idioms = true;
        self.idiom_data = Some(idiom);
        self
    }

    pub fn with_contains_idioms(mut self, contains_idioms: bool) -> Self {
        self.contains_idioms = contains_idioms;
        self
    }
}
