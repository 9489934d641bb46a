//! Aggressive idiom search
//!
//! Runs only when the caller says the text contains idioms and neither the
//! matcher nor the long-text scanner found one. Stages, first hit wins:
//!
//! 1. **Gap pattern** - the idiom's words in order, allowing up to
//!    [`MatchScores::max_gap_words`] other words between consecutive ones.
//! 2. **Word overlap** - share of the idiom's words present anywhere in the
//!    text; the best ratio above [`MatchScores::word_overlap_threshold`] wins.
//! 3. **Flexible patterns** - hand-written English patterns covering tense,
//!    pronoun and wording variants of well-known idioms.

use crate::language::Language;
use crate::matcher::{IdiomMatch, IdiomMatcher, MatchType};
use crate::normalize::normalize_text;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Which aggressive stage found the idiom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggressiveStage {
    GapPattern,
    WordOverlap,
    FlexiblePattern,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggressiveHit {
    pub idiom: IdiomMatch,
    pub stage: AggressiveStage,
}

// (pattern, base idiom)
static FLEXIBLE_ENGLISH_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"(?i)\brain(?:s|ed|ing)?\s+(?:like\s+)?cats\s+(?:and|&)\s+dogs\b",
            "it's raining cats and dogs",
        ),
        (
            r"(?i)\bbr(?:eak|eaks|eaking|oke)\s+(?:a|your|his|her|their|my|our)\s+legs?\b",
            "break a leg",
        ),
        (r"(?i)\bpieces?\s+of\s+(?:the\s+)?cake\b", "piece of cake"),
        (
            r"(?i)\bcost(?:s|ing)?\s+(?:(?:me|us|you|him|her|them)\s+)?an\s+arm\s+and\s+a\s+leg\b",
            "cost an arm and a leg",
        ),
        (
            r"(?i)\bhit(?:s|ting)?\s+(?:the\s+)?nails?\s+(?:right\s+)?on\s+(?:the|its)\s+head\b",
            "hit the nail on the head",
        ),
        (
            r"(?i)\bonce\s+in\s+a\s+(?:very\s+)?blue\s+moon\b",
            "once in a blue moon",
        ),
        (
            r"(?i)\bbeat(?:s|ing)?\s+(?:about|around|round)\s+(?:the\s+)?bush(?:es)?\b",
            "beat around the bush",
        ),
        (
            r"(?i)\bbark(?:s|ed|ing)?\s+up\s+(?:the|a)\s+wrong\s+tree\b",
            "barking up the wrong tree",
        ),
        (
            r"(?i)\bball(?:'s|’s|\s+is|\s+was)?\s+(?:now\s+)?in\s+(?:your|my|his|her|their|our)\s+court\b",
            "the ball is in your court",
        ),
        (
            r"(?i)\bkill(?:s|ed|ing)?\s+two\s+birds\s+with\s+(?:one|a\s+single)\s+stone\b",
            "kill two birds with one stone",
        ),
        (
            r"(?i)\bbit(?:e|es|ing|ten)?\s+off\s+more\s+than\s+(?:you|i|he|she|we|they)\s+(?:can|could)\s+chew\b",
            "bite off more than you can chew",
        ),
    ]
    .into_iter()
    .map(|(pattern, base)| (Regex::new(pattern).expect("valid idiom pattern"), base))
    .collect()
});

/// Run the aggressive stages in order
pub fn aggressive_search(
    matcher: &IdiomMatcher<'_>,
    text: &str,
    source: Language,
    target: Language,
) -> Option<AggressiveHit> {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return None;
    }

    gap_pattern_match(matcher, &normalized, source, target)
        .map(|idiom| AggressiveHit {
            idiom,
            stage: AggressiveStage::GapPattern,
        })
        .or_else(|| {
            word_overlap_match(matcher, &normalized, source, target).map(|idiom| AggressiveHit {
                idiom,
                stage: AggressiveStage::WordOverlap,
            })
        })
        .or_else(|| {
            flexible_pattern_match(matcher, text, source, target).map(|idiom| AggressiveHit {
                idiom,
                stage: AggressiveStage::FlexiblePattern,
            })
        })
}

/// Regex matching `words` in order with up to `max_gap` words between each
fn gap_regex(words: &[&str], max_gap: usize) -> Option<Regex> {
    let separator = format!(r"(?:\s+\S+){{0,{}}}\s+", max_gap);
    let body = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join(&separator);
    Regex::new(&format!(r"\b{}\b", body)).ok()
}

fn gap_pattern_match(
    matcher: &IdiomMatcher<'_>,
    normalized: &str,
    source: Language,
    target: Language,
) -> Option<IdiomMatch> {
    let scores = matcher.scores();
    for entry in matcher.store().idioms(source) {
        let idiom = normalize_text(&entry.phrase);
        let words: Vec<&str> = idiom.split_whitespace().collect();
        if words.len() < 2 {
            continue;
        }
        let Some(translation) = entry.translation(target) else {
            continue;
        };
        let Some(re) = gap_regex(&words, scores.max_gap_words) else {
            continue;
        };
        if let Some(found) = re.find(normalized) {
            debug!(idiom = entry.phrase.as_str(), span = found.as_str(), "Found idiom with gap pattern");
            return Some(
                IdiomMatch::new(&entry.phrase, translation, MatchType::Contained, scores.contained_base)
                    .with_variation(found.as_str()),
            );
        }
    }
    None
}

fn word_overlap_match(
    matcher: &IdiomMatcher<'_>,
    normalized: &str,
    source: Language,
    target: Language,
) -> Option<IdiomMatch> {
    let threshold = matcher.scores().word_overlap_threshold;
    let text_words: HashSet<&str> = normalized.split_whitespace().collect();
    let mut best: Option<(f64, IdiomMatch)> = None;

    for entry in matcher.store().idioms(source) {
        let idiom = normalize_text(&entry.phrase);
        let words: Vec<&str> = idiom.split_whitespace().collect();
        if words.len() < 2 {
            continue;
        }
        let Some(translation) = entry.translation(target) else {
            continue;
        };

        let matched = words.iter().filter(|word| text_words.contains(*word)).count();
        let ratio = matched as f64 / words.len() as f64;
        if ratio <= threshold {
            continue;
        }
        // Strictly greater, so the first idiom wins a tie
        if best.as_ref().is_none_or(|(best_ratio, _)| ratio > *best_ratio) {
            let score = (ratio * 100.0).round() as u32;
            best = Some((
                ratio,
                IdiomMatch::new(&entry.phrase, translation, MatchType::WordOverlap, score)
                    .with_ratio(ratio),
            ));
        }
    }

    if let Some((ratio, idiom)) = &best {
        debug!(idiom = idiom.original_idiom.as_str(), ratio, "Found idiom by word overlap");
    }
    best.map(|(_, idiom)| idiom)
}

fn flexible_pattern_match(
    matcher: &IdiomMatcher<'_>,
    text: &str,
    source: Language,
    target: Language,
) -> Option<IdiomMatch> {
    if source != Language::English {
        return None;
    }
    let store = matcher.store();
    FLEXIBLE_ENGLISH_PATTERNS.iter().find_map(|(re, base)| {
        let found = re.find(text)?;
        let translation = store.entry(source, base)?.translation(target)?;
        debug!(idiom = *base, span = found.as_str(), "Found idiom with flexible pattern");
        Some(
            IdiomMatch::new(*base, translation, MatchType::Pattern, matcher.scores().variation)
                .with_variation(found.as_str()),
        )
    })
}
