//! Idiom-aware translation engine
//!
//! The synchronous core: language codes, text normalization, the idiom
//! store and matcher, long-text scanning, chunking and the offline
//! dictionary. Network translators and the orchestration that falls back
//! across them live in the `idiomatic-mt` crate.

pub mod aggressive;
pub mod chunker;
mod data;
pub mod dictionary;
pub mod error;
pub mod explain;
pub mod language;
pub mod matcher;
pub mod normalize;
pub mod result;
pub mod scanner;
pub mod store;

pub use aggressive::{AggressiveHit, AggressiveStage, aggressive_search};
pub use chunker::{split_into_chunks, split_sentences};
pub use dictionary::{Coverage, DictionaryLookup, FallbackDictionary};
pub use error::{CoreError, CoreResult};
pub use explain::explain;
pub use language::Language;
pub use matcher::{IdiomMatch, IdiomMatcher, MatchScores, MatchType};
pub use normalize::normalize_text;
pub use result::{TranslationMethod, TranslationResult};
pub use scanner::{ScanOutcome, ScanStage, format_explanation, scan_for_idiom};
pub use store::{CommonIdiom, IdiomEntry, IdiomStore, VariationSet};
