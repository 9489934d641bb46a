//! Helpers for same-language explanation requests
//!
//! When the source and target language are the same the input is read as
//! "explain this idiom". Besides the main idiom table, explanation mode
//! looks at the everyday idioms of [`IdiomStore::common_idioms`] and
//! understands a few question shapes such as `what does "X" mean`.

use crate::language::Language;
use crate::matcher::{IdiomMatch, IdiomMatcher, MatchType, on_word_boundaries};
use crate::normalize::normalize_text;
use crate::result::{TranslationMethod, TranslationResult};
use crate::scanner::{format_explanation, scan_for_idiom};
use crate::store::{CommonIdiom, IdiomStore};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

const NO_IDIOM_NOTE: &str = " (No idiomatic expression detected)";

const QUOTES: &[char] = &['"', '\'', '“', '”', '‘', '’', '«', '»'];

static QUERY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^\s*what\s+(?:does|do|is)\s+(.+?)\s+mean\s*[?.!]*\s*$",
        r"(?i)^\s*(?:what\s+is\s+)?(?:the\s+)?meaning\s+of\s+(.+?)\s*[?.!]*\s*$",
        r"(?i)^\s*(?:explain|define)\s+(?:the\s+(?:idiom|phrase|expression)\s+)?(.+?)\s*[?.!]*\s*$",
        r"(?i)^\s*(.+?)\s+(?:idiom|expression|phrase)\s*[?.!]*\s*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid query pattern"))
    .collect()
});

/// Explain the idiom in `text`, which is in `language`
///
/// Tries, in order: the idiom matcher on the whole text, the common-idiom
/// list, the long-text scanner, question phrasings such as
/// `what does X mean`, and finally a loose substring search of the
/// common-idiom list. Falls back to the text itself with a note.
pub fn explain(matcher: &IdiomMatcher<'_>, text: &str, language: Language) -> TranslationResult {
    let store = matcher.store();

    let found = matcher
        .find(text, language, language)
        .or_else(|| {
            match_common_idiom(store, text, language).map(|common| common_match(matcher, common, text))
        })
        .or_else(|| scan_for_idiom(matcher, text, language, language).map(|outcome| outcome.idiom))
        .or_else(|| {
            let phrase = extract_queried_phrase(text)?;
            debug!(phrase = phrase.as_str(), "Explaining queried phrase");
            matcher.find(&phrase, language, language).or_else(|| {
                match_common_idiom(store, &phrase, language)
                    .map(|common| common_match(matcher, common, &phrase))
            })
        })
        .or_else(|| {
            find_common_idiom_substring(store, text, language)
                .map(|common| common_match(matcher, common, text))
        });

    match found {
        Some(idiom) => {
            info!(%language, idiom = idiom.original_idiom.as_str(), "Explaining idiom");
            TranslationResult::new(
                format_explanation(&idiom.original_idiom, &idiom.translation),
                TranslationMethod::IdiomExplanation,
            )
            .with_idiom(idiom)
        }
        None => {
            info!(%language, "No idiom found to explain");
            TranslationResult::new(format!("{}{}", text, NO_IDIOM_NOTE), TranslationMethod::SameLanguage)
                .with_contains_idioms(true)
        }
    }
}

fn common_match(matcher: &IdiomMatcher<'_>, common: &CommonIdiom, text: &str) -> IdiomMatch {
    let scores = matcher.scores();
    if normalize_text(text) == normalize_text(&common.phrase) {
        IdiomMatch::new(&common.phrase, &common.meaning, MatchType::Exact, scores.exact)
    } else {
        IdiomMatch::new(&common.phrase, &common.meaning, MatchType::Contained, scores.contained_base)
    }
}

/// Common idiom equal to the text, or contained in it on word boundaries.
///
/// Both sides are normalized, so case and punctuation are ignored.
pub fn match_common_idiom<'s>(
    store: &'s IdiomStore,
    text: &str,
    language: Language,
) -> Option<&'s CommonIdiom> {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return None;
    }
    store.common_idioms(language).iter().find(|common| {
        let phrase = normalize_text(&common.phrase);
        !phrase.is_empty() && (normalized == phrase || on_word_boundaries(&normalized, &phrase))
    })
}

/// Common idiom appearing anywhere in the raw text, ignoring case only.
///
/// Looser than [`match_common_idiom`]: no normalization and no word
/// boundaries, so "under the weathered" still finds "under the weather".
pub fn find_common_idiom_substring<'s>(
    store: &'s IdiomStore,
    text: &str,
    language: Language,
) -> Option<&'s CommonIdiom> {
    let lowered = text.to_lowercase();
    store
        .common_idioms(language)
        .iter()
        .find(|common| !common.phrase.is_empty() && lowered.contains(&common.phrase.to_lowercase()))
}

/// Phrase asked about in questions like `what does "spill the beans" mean`,
/// `meaning of X`, `X idiom`, `explain X` or `define X`.
///
/// Surrounding quotes are stripped from the extracted phrase.
pub fn extract_queried_phrase(text: &str) -> Option<String> {
    QUERY_PATTERNS.iter().find_map(|re| {
        let phrase = re
            .captures(text)?
            .get(1)?
            .as_str()
            .trim()
            .trim_matches(QUOTES)
            .trim();
        (!phrase.is_empty()).then(|| phrase.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchScores;

    fn run_explain(text: &str, language: Language) -> TranslationResult {
        let store = IdiomStore::builtin();
        let scores = MatchScores::default();
        explain(&IdiomMatcher::new(&store, &scores), text, language)
    }

    // ========== Explanation Flow ==========

    #[test]
    fn test_explain_table_idiom() {
        let result = run_explain("piece of cake", Language::English);
        assert!(result.translated_text.starts_with("\"piece of cake\" means:"));
        assert_eq!(result.translation_method, TranslationMethod::IdiomExplanation);
        assert!(result.is_idiom);
        assert!(result.contains_idioms);
    }

    #[test]
    fn test_explain_common_idiom() {
        let result = run_explain("I'm a bit under the weather", Language::English);
        assert_eq!(
            result.translated_text,
            "\"under the weather\" means: Feeling ill or unwell"
        );
        let idiom = result.idiom_data.unwrap();
        assert_eq!(idiom.match_type, MatchType::Contained);
    }

    #[test]
    fn test_explain_question_form() {
        let result = run_explain("What does 'hit the sack' mean?", Language::English);
        assert_eq!(result.translated_text, "\"hit the sack\" means: To go to bed");
        assert_eq!(result.translation_method, TranslationMethod::IdiomExplanation);
    }

    #[test]
    fn test_explain_loose_substring() {
        let result = run_explain("the roof was under the weathered tiles", Language::English);
        assert_eq!(result.translation_method, TranslationMethod::IdiomExplanation);
        assert!(result.translated_text.starts_with("\"under the weather\""));
    }

    #[test]
    fn test_explain_nothing_found() {
        let result = run_explain("The train leaves at noon", Language::English);
        assert_eq!(
            result.translated_text,
            "The train leaves at noon (No idiomatic expression detected)"
        );
        assert_eq!(result.translation_method, TranslationMethod::SameLanguage);
        assert!(result.contains_idioms);
        assert!(!result.is_idiom);
    }

    #[test]
    fn test_explain_other_language() {
        let result = run_explain("नाक में दम करना", Language::Hindi);
        assert_eq!(result.translation_method, TranslationMethod::IdiomExplanation);
        assert!(result.translated_text.starts_with("\"नाक में दम करना\" means: "));
    }

    // ========== Helpers ==========

    #[test]
    fn test_common_idiom_exact_and_contained() {
        let store = IdiomStore::builtin();
        let found = match_common_idiom(&store, "Under the weather!", Language::English).unwrap();
        assert_eq!(found.phrase, "under the weather");

        let found =
            match_common_idiom(&store, "I am feeling under the weather today", Language::English)
                .unwrap();
        assert_eq!(found.meaning, "Feeling ill or unwell");
    }

    #[test]
    fn test_common_idiom_needs_word_boundaries() {
        let store = IdiomStore::builtin();
        assert!(match_common_idiom(&store, "we were under the weathered roof", Language::English).is_none());
        // The loose substring search still finds it
        let found =
            find_common_idiom_substring(&store, "we were under the weathered roof", Language::English)
                .unwrap();
        assert_eq!(found.phrase, "under the weather");
    }

    #[test]
    fn test_common_idioms_are_per_language() {
        let store = IdiomStore::builtin();
        let found = match_common_idiom(&store, "Me quiere tomar el pelo", Language::Spanish).unwrap();
        assert_eq!(found.phrase, "tomar el pelo");
        assert!(match_common_idiom(&store, "tomar el pelo", Language::English).is_none());
        assert!(match_common_idiom(&store, "", Language::English).is_none());
    }

    #[test]
    fn test_extract_queried_phrase() {
        assert_eq!(
            extract_queried_phrase("What does \"spill the beans\" mean?").as_deref(),
            Some("spill the beans")
        );
        assert_eq!(
            extract_queried_phrase("what is the meaning of 'hit the sack'").as_deref(),
            Some("hit the sack")
        );
        assert_eq!(
            extract_queried_phrase("Meaning of break the ice?").as_deref(),
            Some("break the ice")
        );
        assert_eq!(
            extract_queried_phrase("explain the idiom cut corners").as_deref(),
            Some("cut corners")
        );
        assert_eq!(extract_queried_phrase("Define “on thin ice”.").as_deref(), Some("on thin ice"));
        assert_eq!(
            extract_queried_phrase("the last straw idiom").as_deref(),
            Some("the last straw")
        );
    }

    #[test]
    fn test_extract_queried_phrase_rejects_plain_text() {
        assert!(extract_queried_phrase("The weather is nice").is_none());
        assert!(extract_queried_phrase("what does \"\" mean").is_none());
    }
}
