//! Offline bilingual phrase dictionary
//!
//! Last resort when no idiom matched and every network translator failed.
//! A lookup tries the whole text first, then walks the words left to right
//! replacing the longest known phrase at each position. Words the dictionary
//! does not know are kept as they are.

use crate::data::{self, DictionaryTable};
use crate::language::Language;
use std::collections::HashMap;
use tracing::debug;

const PARTIAL_SUFFIX: &str = " (Partial translation)";
const UNAVAILABLE_SUFFIX: &str = " (Translation unavailable)";

/// How much of the text the dictionary could translate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    Full,
    Partial,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryLookup {
    /// Translated text, annotated when coverage is not full
    pub text: String,
    pub coverage: Coverage,
}

#[derive(Debug, Clone)]
struct Phrase {
    /// Lowercased words with surrounding punctuation removed
    words: Vec<String>,
    translation: String,
}

#[derive(Debug, Clone, Default)]
pub struct FallbackDictionary {
    phrases: HashMap<(Language, Language), Vec<Phrase>>,
}

impl FallbackDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// English ↔ Hindi phrase lists compiled into the binary
    pub fn builtin() -> Self {
        let mut dictionary = Self::new();
        let tables: [(Language, Language, DictionaryTable); 2] = [
            (Language::English, Language::Hindi, data::ENGLISH_TO_HINDI),
            (Language::Hindi, Language::English, data::HINDI_TO_ENGLISH),
        ];
        for (source, target, table) in tables {
            for (phrase, translation) in table {
                dictionary.insert(source, target, phrase, translation);
            }
        }
        dictionary
    }

    /// Add or replace one phrase translation
    pub fn insert(&mut self, source: Language, target: Language, phrase: &str, translation: &str) {
        let words = phrase_words(phrase);
        if words.is_empty() {
            return;
        }
        let phrases = self.phrases.entry((source, target)).or_default();
        match phrases.iter_mut().find(|p| p.words == words) {
            Some(existing) => existing.translation = translation.to_string(),
            None => phrases.push(Phrase {
                words,
                translation: translation.to_string(),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.values().all(Vec::is_empty)
    }

    /// Translate as much of `text` as the dictionary knows
    pub fn translate(&self, text: &str, source: Language, target: Language) -> DictionaryLookup {
        let text = text.trim();
        let phrases = self
            .phrases
            .get(&(source, target))
            .map(Vec::as_slice)
            .unwrap_or_default();

        let whole = phrase_words(text);
        if let Some(phrase) = phrases.iter().find(|p| !whole.is_empty() && p.words == whole) {
            debug!(%source, %target, "Dictionary matched whole phrase");
            return DictionaryLookup {
                text: phrase.translation.clone(),
                coverage: Coverage::Full,
            };
        }

        let tokens: Vec<Token<'_>> = text.split_whitespace().map(Token::split).collect();
        let longest = phrases.iter().map(|p| p.words.len()).max().unwrap_or(0);
        let mut output: Vec<String> = Vec::with_capacity(tokens.len());
        let mut known = 0;
        let mut words = 0;
        let mut i = 0;

        while i < tokens.len() {
            if tokens[i].core.is_empty() {
                output.push(tokens[i].raw.to_string());
                i += 1;
                continue;
            }

            let hit = (1..=longest.min(tokens.len() - i)).rev().find_map(|n| {
                let window = &tokens[i..i + n];
                phrases
                    .iter()
                    .find(|p| {
                        p.words.len() == n
                            && window.iter().zip(&p.words).all(|(t, w)| t.core_lower == *w)
                    })
                    .map(|p| (n, p))
            });

            match hit {
                Some((n, phrase)) => {
                    let first = &tokens[i];
                    let last = &tokens[i + n - 1];
                    let mut rendered = format!("{}{}", first.leading, phrase.translation);
                    if !phrase.translation.ends_with(last.trailing) {
                        rendered.push_str(last.trailing);
                    }
                    output.push(rendered);
                    known += n;
                    words += n;
                    i += n;
                }
                None => {
                    output.push(tokens[i].raw.to_string());
                    words += 1;
                    i += 1;
                }
            }
        }

        debug!(%source, %target, known, words, "Dictionary word coverage");
        if known == 0 {
            DictionaryLookup {
                text: format!("{}{}", text, UNAVAILABLE_SUFFIX),
                coverage: Coverage::Unavailable,
            }
        } else if known < words {
            DictionaryLookup {
                text: format!("{}{}", output.join(" "), PARTIAL_SUFFIX),
                coverage: Coverage::Partial,
            }
        } else {
            DictionaryLookup {
                text: output.join(" "),
                coverage: Coverage::Full,
            }
        }
    }
}

fn is_edge_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '¿' | '¡' | '।' | '“' | '”' | '‘' | '’' | '«' | '»')
}

fn phrase_words(phrase: &str) -> Vec<String> {
    phrase
        .split_whitespace()
        .map(|w| w.trim_matches(is_edge_punctuation).to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// A whitespace-separated token split into punctuation and word core
#[derive(Debug)]
struct Token<'a> {
    raw: &'a str,
    leading: &'a str,
    core: &'a str,
    core_lower: String,
    trailing: &'a str,
}

impl<'a> Token<'a> {
    fn split(raw: &'a str) -> Self {
        let start = raw.trim_start_matches(is_edge_punctuation);
        let core = start.trim_end_matches(is_edge_punctuation);
        let leading = &raw[..raw.len() - start.len()];
        let trailing = &start[core.len()..];
        Self {
            raw,
            leading,
            core,
            core_lower: core.to_lowercase(),
            trailing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(text: &str, source: Language, target: Language) -> DictionaryLookup {
        FallbackDictionary::builtin().translate(text, source, target)
    }

    #[test]
    fn test_whole_phrase_match() {
        let result = lookup("Thank you", Language::English, Language::Hindi);
        assert_eq!(result.text, "धन्यवाद");
        assert_eq!(result.coverage, Coverage::Full);

        let result = lookup("how are you?", Language::English, Language::Hindi);
        assert_eq!(result.text, "आप कैसे हैं?");
    }

    #[test]
    fn test_partial_translation() {
        let result = lookup("hello world", Language::English, Language::Hindi);
        assert_eq!(result.text, "नमस्ते world (Partial translation)");
        assert_eq!(result.coverage, Coverage::Partial);
    }

    #[test]
    fn test_longest_phrase_wins_and_punctuation_is_kept() {
        let result = lookup("Hello, good morning!", Language::English, Language::Hindi);
        assert_eq!(result.text, "नमस्ते, सुप्रभात!");
        assert_eq!(result.coverage, Coverage::Full);
    }

    #[test]
    fn test_reverse_direction() {
        let result = lookup("धन्यवाद", Language::Hindi, Language::English);
        assert_eq!(result.text, "Thank you");
        let result = lookup("नमस्ते दोस्त", Language::Hindi, Language::English);
        assert_eq!(result.text, "Hello दोस्त (Partial translation)");
    }

    #[test]
    fn test_unavailable_without_entries() {
        let result = lookup("xyzabc", Language::English, Language::French);
        assert_eq!(result.text, "xyzabc (Translation unavailable)");
        assert_eq!(result.coverage, Coverage::Unavailable);

        let result = FallbackDictionary::new().translate("hello", Language::English, Language::Hindi);
        assert_eq!(result.text, "hello (Translation unavailable)");
    }

    #[test]
    fn test_insert_replaces_existing_phrase() {
        let mut dictionary = FallbackDictionary::new();
        assert!(dictionary.is_empty());
        dictionary.insert(Language::English, Language::French, "Hello", "Bonjour");
        dictionary.insert(Language::English, Language::French, "hello!", "Salut");
        let result = dictionary.translate("hello", Language::English, Language::French);
        assert_eq!(result.text, "Salut");
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn test_token_split() {
        let token = Token::split("¿Qué?");
        assert_eq!(token.leading, "¿");
        assert_eq!(token.core, "Qué");
        assert_eq!(token.trailing, "?");
        let token = Token::split("...");
        assert!(token.core.is_empty());
    }
}
