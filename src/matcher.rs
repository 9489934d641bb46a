//! Scored idiom matching
//!
//! Matching runs in phases over the source language's idiom table:
//!
//! 1. **Exact** - the normalized text equals a normalized idiom (optionally
//!    prefixed with "the "). The first exact hit in table order is returned
//!    straight away.
//! 2. **Contained** - a normalized idiom of at least
//!    [`MatchScores::min_contained_len`] characters occurs inside the text.
//!    Scored by idiom length, with a bonus when it sits on word boundaries.
//! 3. **Variation** - the text equals, or contains, a curated alternate
//!    phrasing of an idiom.
//!
//! Candidates from phases 2 and 3 are ranked by score (ties keep discovery
//! order) and the best one wins.

use crate::language::Language;
use crate::normalize::{char_len, normalize_text};
use crate::store::IdiomStore;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// How an idiom was recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Contained,
    Variation,
    VariationContained,
    WordOverlap,
    Pattern,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Contained => "contained",
            MatchType::Variation => "variation",
            MatchType::VariationContained => "variation_contained",
            MatchType::WordOverlap => "word_overlap",
            MatchType::Pattern => "pattern",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring and threshold constants used across idiom matching
///
/// The defaults are empirically chosen values kept for behavioural
/// compatibility; override them only deliberately.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScores {
    /// Score given to every exact match
    pub exact: u32,
    /// Base score of a contained match before the length component
    pub contained_base: u32,
    /// Upper bound of the length component of a contained match
    pub contained_length_cap: u32,
    /// Added to a contained match that sits on word boundaries
    pub word_boundary_bonus: u32,
    /// Flat score of a variation match
    pub variation: u32,
    /// Normalized idioms shorter than this only match exactly
    pub min_contained_len: usize,
    /// Word-overlap ratio an idiom must exceed in aggressive search
    pub word_overlap_threshold: f64,
    /// Words allowed between consecutive idiom words in aggressive search
    pub max_gap_words: usize,
}

impl Default for MatchScores {
    fn default() -> Self {
        Self {
            exact: 100,
            contained_base: 50,
            contained_length_cap: 40,
            word_boundary_bonus: 5,
            variation: 70,
            min_contained_len: 8,
            word_overlap_threshold: 0.7,
            max_gap_words: 3,
        }
    }
}

/// A recognised idiom
///
/// Produced as a candidate during matching; the highest-scoring candidate is
/// handed back to the caller and the rest are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdiomMatch {
    /// Translation (or explanation) for the requested target language
    pub translation: String,
    /// Always true; kept so serialized idiom data is self-describing
    pub is_idiom: bool,
    pub match_type: MatchType,
    /// The idiom as stored in the table
    pub original_idiom: String,
    pub score: u32,
    /// Variation or pattern text that actually matched, when different
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_variation: Option<String>,
    /// Share of the idiom's words found in the text (word-overlap matches)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_ratio: Option<f64>,
}

impl IdiomMatch {
    pub fn new(
        original_idiom: impl Into<String>,
        translation: impl Into<String>,
        match_type: MatchType,
        score: u32,
    ) -> Self {
        Self {
            translation: translation.into(),
            is_idiom: true,
            match_type,
            original_idiom: original_idiom.into(),
            score,
            matched_variation: None,
            match_ratio: None,
        }
    }

    pub fn with_variation(mut self, variation: impl Into<String>) -> Self {
        self.matched_variation = Some(variation.into());
        self
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.match_ratio = Some(ratio);
        self
    }
}

/// Searches an [`IdiomStore`] for the idiom a text expresses
#[derive(Debug, Clone, Copy)]
pub struct IdiomMatcher<'a> {
    store: &'a IdiomStore,
    scores: &'a MatchScores,
}

impl<'a> IdiomMatcher<'a> {
    pub fn new(store: &'a IdiomStore, scores: &'a MatchScores) -> Self {
        Self { store, scores }
    }

    pub fn store(&self) -> &'a IdiomStore {
        self.store
    }

    pub fn scores(&self) -> &'a MatchScores {
        self.scores
    }

    /// Find the best idiom match for `text`, or `None`
    pub fn find(&self, text: &str, source: Language, target: Language) -> Option<IdiomMatch> {
        let normalized = normalize_text(text);
        debug!(
            %source,
            %target,
            same_language = source == target,
            normalized = normalized.as_str(),
            "Attempting idiom match"
        );
        if normalized.is_empty() {
            return None;
        }

        if let Some(exact) = self.exact_match(&normalized, source, target) {
            debug!(idiom = exact.original_idiom.as_str(), "Found exact idiom match");
            return Some(exact);
        }

        let mut candidates = self.contained_matches(&normalized, source, target);
        if let Some(variation) = self.variation_match(&normalized, source, target) {
            candidates.push(variation);
        }

        // sort_by is stable, so equal scores keep discovery order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        let best = candidates.into_iter().next();

        match &best {
            Some(m) => debug!(
                idiom = m.original_idiom.as_str(),
                match_type = %m.match_type,
                score = m.score,
                "Found idiom match"
            ),
            None => debug!("No idiom match found"),
        }
        best
    }

    fn exact_match(&self, normalized: &str, source: Language, target: Language) -> Option<IdiomMatch> {
        self.store.idioms(source).iter().find_map(|entry| {
            let idiom = normalize_text(&entry.phrase);
            let matches = normalized == idiom
                || normalized == format!("{}?", idiom)
                || normalized == format!("the {}", idiom);
            if !matches {
                return None;
            }
            entry.translation(target).map(|translation| {
                IdiomMatch::new(&entry.phrase, translation, MatchType::Exact, self.scores.exact)
            })
        })
    }

    fn contained_matches(
        &self,
        normalized: &str,
        source: Language,
        target: Language,
    ) -> Vec<IdiomMatch> {
        let mut candidates = Vec::new();

        for entry in self.store.idioms(source) {
            let idiom = normalize_text(&entry.phrase);
            let idiom_len = char_len(&idiom);
            if idiom_len < self.scores.min_contained_len || !normalized.contains(&idiom) {
                continue;
            }
            let Some(translation) = entry.translation(target) else {
                continue;
            };

            let length_component = (idiom_len as u32).min(self.scores.contained_length_cap);
            let mut score = self.scores.contained_base + length_component;
            if on_word_boundaries(normalized, &idiom) {
                score += self.scores.word_boundary_bonus;
            }

            candidates.push(IdiomMatch::new(
                &entry.phrase,
                translation,
                MatchType::Contained,
                score,
            ));
        }

        candidates
    }

    /// First variation hit, checking each base idiom's forms for equality
    /// before containment
    fn variation_match(
        &self,
        normalized: &str,
        source: Language,
        target: Language,
    ) -> Option<IdiomMatch> {
        for set in self.store.variations(source) {
            let Some(translation) = self
                .store
                .entry(source, &set.base)
                .and_then(|entry| entry.translation(target))
            else {
                continue;
            };

            let hit = set
                .forms
                .iter()
                .find(|form| normalized == form.as_str())
                .map(|form| (form, MatchType::Variation))
                .or_else(|| {
                    set.forms
                        .iter()
                        .find(|form| normalized.contains(form.as_str()))
                        .map(|form| (form, MatchType::VariationContained))
                });

            if let Some((form, match_type)) = hit {
                debug!(variation = form.as_str(), base = set.base.as_str(), "Found idiom through variation");
                return Some(
                    IdiomMatch::new(&set.base, translation, match_type, self.scores.variation)
                        .with_variation(form),
                );
            }
        }
        None
    }
}

/// True when `needle` occurs in `haystack` delimited by word boundaries
pub(crate) fn on_word_boundaries(haystack: &str, needle: &str) -> bool {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(needle));
    Regex::new(&pattern)
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}
