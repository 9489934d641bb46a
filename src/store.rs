//! Idiom storage
//!
//! The store maps a source language to an ordered list of idioms, each
//! carrying its per-target-language translation (or, when the target equals
//! the source, an explanation). Alongside the idioms it keeps curated
//! variation sets and the everyday idioms offered in explanation mode.
//!
//! Table order is significant: when several idioms match a text exactly the
//! first one in the table wins, so entries are kept in insertion order.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "idioms": [
//!     {
//!       "language": "en",
//!       "phrase": "break a leg",
//!       "translations": { "es": "Buena suerte", "fr": "Bonne chance" },
//!       "variations": ["breaking a leg"]
//!     }
//!   ],
//!   "common": [
//!     { "language": "en", "phrase": "under the weather", "meaning": "Feeling ill" }
//!   ]
//! }
//! ```

use crate::data;
use crate::error::{CoreError, CoreResult};
use crate::language::Language;
use crate::normalize::normalize_text;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// One idiom with its translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdiomEntry {
    /// The idiom as stored; matched case-insensitively
    pub phrase: String,
    /// Target language → translation or explanation
    pub translations: BTreeMap<Language, String>,
}

impl IdiomEntry {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            translations: BTreeMap::new(),
        }
    }

    /// Translation for `target`, if this idiom has one.
    ///
    /// An idiom without a translation for the requested target is treated as
    /// a non-match for that language pair.
    pub fn translation(&self, target: Language) -> Option<&str> {
        self.translations.get(&target).map(String::as_str)
    }
}

/// Alternate surface forms of a canonical idiom
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationSet {
    /// Phrase of the canonical [`IdiomEntry`] these forms map back to
    pub base: String,
    /// Normalized alternate phrasings
    pub forms: Vec<String>,
}

/// An everyday idiom with its plain-language meaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonIdiom {
    pub phrase: String,
    pub meaning: String,
}

#[derive(Debug, Deserialize)]
struct IdiomFile {
    #[serde(default)]
    idioms: Vec<IdiomRecord>,
    #[serde(default)]
    common: Vec<CommonRecord>,
}

#[derive(Debug, Deserialize)]
struct IdiomRecord {
    language: Language,
    phrase: String,
    #[serde(default)]
    translations: HashMap<Language, String>,
    #[serde(default)]
    variations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CommonRecord {
    language: Language,
    phrase: String,
    meaning: String,
}

/// Read-mostly idiom database
#[derive(Debug, Clone, Default)]
pub struct IdiomStore {
    idioms: HashMap<Language, Vec<IdiomEntry>>,
    variations: HashMap<Language, Vec<VariationSet>>,
    common: HashMap<Language, Vec<CommonIdiom>>,
}

impl IdiomStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in idiom tables
    pub fn builtin() -> Self {
        let mut store = Self::new();

        let tables = [
            (Language::English, data::ENGLISH_IDIOMS),
            (Language::Hindi, data::HINDI_IDIOMS),
            (Language::Spanish, data::SPANISH_IDIOMS),
            (Language::French, data::FRENCH_IDIOMS),
        ];
        for (source, table) in tables {
            let entries = store.idioms.entry(source).or_default();
            for (phrase, translations) in table {
                let mut entry = IdiomEntry::new(*phrase);
                for (target, translation) in translations.iter() {
                    entry.translations.insert(*target, translation.to_string());
                }
                entries.push(entry);
            }
        }

        for (base, forms) in data::ENGLISH_VARIATIONS {
            for form in forms.iter() {
                store.add_variation(Language::English, base, form);
            }
        }

        let common = [
            (Language::English, data::ENGLISH_COMMON_IDIOMS),
            (Language::Spanish, data::SPANISH_COMMON_IDIOMS),
            (Language::French, data::FRENCH_COMMON_IDIOMS),
        ];
        for (language, table) in common {
            for (phrase, meaning) in table {
                store.add_common_idiom(language, phrase, meaning);
            }
        }

        store
    }

    /// Load a store from the JSON format described in the module docs
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let file: IdiomFile = serde_json::from_str(json)?;
        let mut store = Self::new();

        for record in file.idioms {
            if record.phrase.trim().is_empty() {
                return Err(CoreError::DataError(format!(
                    "Idiom with empty phrase for language {}",
                    record.language
                )));
            }

            // Sort targets so insertion order does not depend on hash order
            let mut translations: Vec<_> = record.translations.into_iter().collect();
            translations.sort_by_key(|(target, _)| *target);
            let entry = store.entry_mut(record.language, &record.phrase);
            entry.translations.extend(translations);

            for form in &record.variations {
                store.add_variation(record.language, &record.phrase, form);
            }
        }

        for record in file.common {
            store.add_common_idiom(record.language, &record.phrase, &record.meaning);
        }

        debug!(idioms = store.len(), "Loaded idiom store from JSON");
        Ok(store)
    }

    /// Idioms for a source language, in table order
    pub fn idioms(&self, source: Language) -> &[IdiomEntry] {
        self.idioms.get(&source).map(Vec::as_slice).unwrap_or_default()
    }

    /// Look up an idiom by its stored phrase
    pub fn entry(&self, source: Language, phrase: &str) -> Option<&IdiomEntry> {
        self.idioms(source).iter().find(|e| e.phrase == phrase)
    }

    /// Variation sets for a source language
    pub fn variations(&self, source: Language) -> &[VariationSet] {
        self.variations
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Everyday idioms used by explanation mode
    pub fn common_idioms(&self, language: Language) -> &[CommonIdiom] {
        self.common
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Languages that have at least one idiom
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<_> = self
            .idioms
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(lang, _)| *lang)
            .collect();
        languages.sort();
        languages
    }

    /// Total number of idioms across all source languages
    pub fn len(&self) -> usize {
        self.idioms.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert or overwrite one translation of one idiom
    ///
    /// Existing translations of the same idiom into other target languages
    /// are left untouched. A new idiom is appended to the end of the table.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidIdiom`] if the phrase or translation is blank.
    pub fn add_idiom(
        &mut self,
        phrase: &str,
        source: Language,
        target: Language,
        translation: &str,
    ) -> CoreResult<()> {
        let phrase = phrase.trim();
        let translation = translation.trim();
        if phrase.is_empty() {
            return Err(CoreError::InvalidIdiom("Idiom text cannot be empty".to_string()));
        }
        if translation.is_empty() {
            return Err(CoreError::InvalidIdiom(format!(
                "Translation for '{}' cannot be empty",
                phrase
            )));
        }

        self.entry_mut(source, phrase)
            .translations
            .insert(target, translation.to_string());
        debug!(%source, %target, phrase, "Added idiom translation");
        Ok(())
    }

    /// Register an alternate phrasing for `base`
    ///
    /// Forms are stored normalized; duplicates are ignored.
    pub fn add_variation(&mut self, source: Language, base: &str, form: &str) {
        let form = normalize_text(form);
        if form.is_empty() {
            return;
        }

        let sets = self.variations.entry(source).or_default();
        let set = match sets.iter().position(|s| s.base == base) {
            Some(index) => &mut sets[index],
            None => {
                sets.push(VariationSet {
                    base: base.to_string(),
                    forms: Vec::new(),
                });
                let last = sets.len() - 1;
                &mut sets[last]
            }
        };
        if !set.forms.contains(&form) {
            set.forms.push(form);
        }
    }

    /// Register an everyday idiom for explanation mode
    pub fn add_common_idiom(&mut self, language: Language, phrase: &str, meaning: &str) {
        let list = self.common.entry(language).or_default();
        match list.iter_mut().find(|c| c.phrase == phrase) {
            Some(existing) => existing.meaning = meaning.to_string(),
            None => list.push(CommonIdiom {
                phrase: phrase.to_string(),
                meaning: meaning.to_string(),
            }),
        }
    }

    fn entry_mut(&mut self, source: Language, phrase: &str) -> &mut IdiomEntry {
        let entries = self.idioms.entry(source).or_default();
        match entries.iter().position(|e| e.phrase == phrase) {
            Some(index) => &mut entries[index],
            None => {
                entries.push(IdiomEntry::new(phrase));
                let last = entries.len() - 1;
                &mut entries[last]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_loaded() {
        let store = IdiomStore::builtin();
        assert_eq!(store.idioms(Language::English).len(), 13);
        assert_eq!(store.idioms(Language::Hindi).len(), 5);
        assert_eq!(store.idioms(Language::Spanish).len(), 1);
        assert_eq!(store.idioms(Language::French).len(), 1);
        assert!(store.idioms(Language::Japanese).is_empty());
        assert_eq!(store.len(), 20);
    }

    #[test]
    fn test_builtin_order_is_table_order() {
        let store = IdiomStore::builtin();
        let phrases: Vec<_> = store
            .idioms(Language::English)
            .iter()
            .take(3)
            .map(|e| e.phrase.as_str())
            .collect();
        assert_eq!(phrases, vec!["break a leg", "piece of cake", "cost an arm and a leg"]);
    }

    #[test]
    fn test_translation_lookup() {
        let store = IdiomStore::builtin();
        let entry = store.entry(Language::English, "break a leg").unwrap();
        assert_eq!(
            entry.translation(Language::Spanish),
            Some("Buena suerte (expresión de desear buena suerte)")
        );
        assert_eq!(entry.translation(Language::Japanese), None);
    }

    #[test]
    fn test_builtin_variations_are_english_only() {
        let store = IdiomStore::builtin();
        assert_eq!(store.variations(Language::English).len(), 10);
        assert!(store.variations(Language::Hindi).is_empty());
        for set in store.variations(Language::English) {
            assert!(
                store.entry(Language::English, &set.base).is_some(),
                "variation base '{}' has no idiom entry",
                set.base
            );
        }
    }

    #[test]
    fn test_add_idiom_new_entry_appends() {
        let mut store = IdiomStore::builtin();
        store
            .add_idiom("under the weather", Language::English, Language::Spanish, "Estar pachucho")
            .unwrap();

        let last = store.idioms(Language::English).last().unwrap();
        assert_eq!(last.phrase, "under the weather");
        assert_eq!(last.translation(Language::Spanish), Some("Estar pachucho"));
    }

    #[test]
    fn test_add_idiom_keeps_other_targets() {
        let mut store = IdiomStore::builtin();
        store
            .add_idiom("break a leg", Language::English, Language::Spanish, "¡Mucha mierda!")
            .unwrap();

        let entry = store.entry(Language::English, "break a leg").unwrap();
        assert_eq!(entry.translation(Language::Spanish), Some("¡Mucha mierda!"));
        assert_eq!(
            entry.translation(Language::French),
            Some("Bonne chance (souhait de réussite)")
        );
        assert_eq!(store.idioms(Language::English).len(), 13);
    }

    #[test]
    fn test_add_idiom_new_language() {
        let mut store = IdiomStore::new();
        store
            .add_idiom("猿も木から落ちる", Language::Japanese, Language::English, "Even monkeys fall from trees")
            .unwrap();
        assert_eq!(store.languages(), vec![Language::Japanese]);
    }

    #[test]
    fn test_add_idiom_rejects_blank_input() {
        let mut store = IdiomStore::new();
        assert!(matches!(
            store.add_idiom("  ", Language::English, Language::French, "x"),
            Err(CoreError::InvalidIdiom(_))
        ));
        assert!(matches!(
            store.add_idiom("spill the beans", Language::English, Language::French, ""),
            Err(CoreError::InvalidIdiom(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_variation_normalizes_and_dedups() {
        let mut store = IdiomStore::new();
        store.add_variation(Language::English, "break a leg", "Breaking a leg!");
        store.add_variation(Language::English, "break a leg", "breaking a leg");
        let sets = store.variations(Language::English);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].forms, vec!["breaking a leg"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "idioms": [
                {
                    "language": "en",
                    "phrase": "spill the beans",
                    "translations": { "fr": "Vendre la mèche", "es": "Irse de la lengua" },
                    "variations": ["spilled the beans"]
                },
                {
                    "language": "en-GB",
                    "phrase": "chuffed to bits",
                    "translations": { "fr": "Ravi" }
                }
            ],
            "common": [
                { "language": "en", "phrase": "hit the sack", "meaning": "To go to bed" }
            ]
        }"#;

        let store = IdiomStore::from_json(json).unwrap();
        let phrases: Vec<_> = store
            .idioms(Language::English)
            .iter()
            .map(|e| e.phrase.as_str())
            .collect();
        assert_eq!(phrases, vec!["spill the beans", "chuffed to bits"]);
        assert_eq!(
            store
                .entry(Language::English, "spill the beans")
                .unwrap()
                .translation(Language::French),
            Some("Vendre la mèche")
        );
        assert_eq!(store.variations(Language::English)[0].forms, vec!["spilled the beans"]);
        assert_eq!(store.common_idioms(Language::English).len(), 1);
    }

    #[test]
    fn test_from_json_rejects_unknown_language() {
        let json = r#"{ "idioms": [ { "language": "tlh", "phrase": "x", "translations": {} } ] }"#;
        assert!(matches!(
            IdiomStore::from_json(json),
            Err(CoreError::DataError(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(IdiomStore::from_json("not json").is_err());
        let blank = r#"{ "idioms": [ { "language": "en", "phrase": " " } ] }"#;
        assert!(IdiomStore::from_json(blank).is_err());
    }
}
