//! Finding idioms embedded in longer text
//!
//! Used when matching the whole input fails but the input may still contain
//! an idiom somewhere inside it. Three increasingly expensive stages run in
//! order and the first hit wins:
//!
//! 1. case-insensitive search for each stored idiom in the raw text,
//! 2. idiom matching on each sentence of at least 10 characters,
//! 3. idiom matching on sliding word windows, longest first (10 down to 3
//!    words). This stage is roughly quadratic in the word count.
//!
//! When a hit is found in cross-language mode the matched span is replaced
//! by its translation inside the original text. In same-language mode the
//! result is an explanation of the idiom instead.

use crate::chunker::split_sentences;
use crate::language::Language;
use crate::matcher::{IdiomMatch, IdiomMatcher};
use crate::normalize::char_len;
use regex::Regex;
use tracing::debug;

const MIN_SEGMENT_CHARS: usize = 10;
const MAX_WINDOW_WORDS: usize = 10;
const MIN_WINDOW_WORDS: usize = 3;

/// Which scanning stage found the idiom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStage {
    DirectSubstring,
    Sentence,
    PhraseWindow,
}

/// Result of a successful scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Original text with the idiom replaced, or the explanation string
    pub text: String,
    pub idiom: IdiomMatch,
    pub stage: ScanStage,
}

/// Format an idiom explanation: `"<idiom>" means: <meaning>`
pub fn format_explanation(idiom: &str, meaning: &str) -> String {
    format!("\"{}\" means: {}", idiom, meaning)
}

/// Scan `text` for an embedded idiom
pub fn scan_for_idiom(
    matcher: &IdiomMatcher<'_>,
    text: &str,
    source: Language,
    target: Language,
) -> Option<ScanOutcome> {
    if text.trim().is_empty() {
        return None;
    }

    direct_substring(matcher, text, source, target)
        .or_else(|| sentence_scan(matcher, text, source, target))
        .or_else(|| window_scan(matcher, text, source, target))
}

fn direct_substring(
    matcher: &IdiomMatcher<'_>,
    text: &str,
    source: Language,
    target: Language,
) -> Option<ScanOutcome> {
    for entry in matcher.store().idioms(source) {
        let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(&entry.phrase))) else {
            continue;
        };
        let Some(found) = re.find(text) else {
            continue;
        };
        let Some(idiom) = matcher.find(&entry.phrase, source, target) else {
            continue;
        };

        debug!(idiom = entry.phrase.as_str(), "Found idiom by direct substring search");
        let replaced = if source == target {
            format_explanation(&idiom.original_idiom, &idiom.translation)
        } else {
            format!(
                "{}{}{}",
                &text[..found.start()],
                idiom.translation,
                &text[found.end()..]
            )
        };
        return Some(ScanOutcome {
            text: replaced,
            idiom,
            stage: ScanStage::DirectSubstring,
        });
    }
    None
}

fn sentence_scan(
    matcher: &IdiomMatcher<'_>,
    text: &str,
    source: Language,
    target: Language,
) -> Option<ScanOutcome> {
    for sentence in split_sentences(text) {
        if char_len(sentence) < MIN_SEGMENT_CHARS {
            continue;
        }
        if let Some(idiom) = matcher.find(sentence, source, target) {
            debug!(sentence, idiom = idiom.original_idiom.as_str(), "Found idiom in sentence");
            return Some(ScanOutcome {
                text: substitute(text, sentence, &idiom, source, target),
                idiom,
                stage: ScanStage::Sentence,
            });
        }
    }
    None
}

fn window_scan(
    matcher: &IdiomMatcher<'_>,
    text: &str,
    source: Language,
    target: Language,
) -> Option<ScanOutcome> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let longest = MAX_WINDOW_WORDS.min(words.len());
    if longest < MIN_WINDOW_WORDS {
        return None;
    }

    for size in (MIN_WINDOW_WORDS..=longest).rev() {
        for start in 0..=(words.len() - size) {
            let phrase = words[start..start + size].join(" ");
            if char_len(&phrase) < MIN_SEGMENT_CHARS {
                continue;
            }
            let Some(idiom) = matcher.find(&phrase, source, target) else {
                continue;
            };

            debug!(phrase = phrase.as_str(), idiom = idiom.original_idiom.as_str(), "Found idiom in phrase window");
            let replaced = if source != target && !text.contains(&phrase) {
                // Irregular spacing in the original; rebuild from the word list
                let mut rebuilt: Vec<&str> = words[..start].to_vec();
                rebuilt.push(&idiom.translation);
                rebuilt.extend_from_slice(&words[start + size..]);
                rebuilt.join(" ")
            } else {
                substitute(text, &phrase, &idiom, source, target)
            };
            return Some(ScanOutcome {
                text: replaced,
                idiom,
                stage: ScanStage::PhraseWindow,
            });
        }
    }
    None
}

fn substitute(
    text: &str,
    span: &str,
    idiom: &IdiomMatch,
    source: Language,
    target: Language,
) -> String {
    if source == target {
        format_explanation(&idiom.original_idiom, &idiom.translation)
    } else {
        text.replacen(span, &idiom.translation, 1)
    }
}
