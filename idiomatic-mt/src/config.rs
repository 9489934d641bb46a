//! Translator configuration
//!
//! Settings come from environment variables:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `LIBRE_TRANSLATE_ENDPOINT` | primary LibreTranslate URL | unset |
//! | `LIBRE_TRANSLATE_FALLBACK_ENDPOINTS` | comma-separated fallback URLs, in priority order | none |
//! | `LIBRE_TRANSLATE_API_KEY` | optional `api_key` sent to LibreTranslate | unset |
//! | `GOOGLE_TRANSLATE_ENDPOINT` | secondary provider URL | [`DEFAULT_GOOGLE_ENDPOINT`] |
//! | `GOOGLE_TRANSLATE_ENABLED` | `false` disables the secondary provider | `true` |
//! | `TRANSLATION_TIMEOUT_SECS` | per-call timeout | 20 |
//! | `TRANSLATION_MAX_CHUNK_SIZE` | characters per provider request | 1000 |
//! | `TRANSLATION_SHORT_TEXT_THRESHOLD` | texts shorter than this get an idiom check | 100 |
//! | `IDIOM_DATA_PATH` | JSON idiom tables, read by the binaries | built-in tables |

use crate::error::{MtError, MtResult};
use crate::google_translate::DEFAULT_GOOGLE_ENDPOINT;
use idiomatic::{IdiomStore, MatchScores};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_SHORT_TEXT_THRESHOLD: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorConfig {
    pub libre_endpoint: Option<String>,
    pub libre_fallback_endpoints: Vec<String>,
    pub libre_api_key: Option<String>,
    /// `None` disables the secondary provider
    pub google_endpoint: Option<String>,
    pub timeout: Duration,
    pub max_chunk_size: usize,
    pub short_text_threshold: usize,
    pub scores: MatchScores,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            libre_endpoint: None,
            libre_fallback_endpoints: Vec::new(),
            libre_api_key: None,
            google_endpoint: Some(DEFAULT_GOOGLE_ENDPOINT.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            short_text_threshold: DEFAULT_SHORT_TEXT_THRESHOLD,
            scores: MatchScores::default(),
        }
    }
}

impl TranslatorConfig {
    /// Read the configuration from the process environment
    ///
    /// # Errors
    ///
    /// [`MtError::ConfigError`] when a numeric variable does not parse.
    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup` instead of the environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MtResult<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        config.libre_endpoint = var("LIBRE_TRANSLATE_ENDPOINT");
        config.libre_fallback_endpoints = var("LIBRE_TRANSLATE_FALLBACK_ENDPOINTS")
            .map(|list| split_list(&list))
            .unwrap_or_default();
        config.libre_api_key = var("LIBRE_TRANSLATE_API_KEY");

        let google_enabled = var("GOOGLE_TRANSLATE_ENABLED")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(true);
        config.google_endpoint = if google_enabled {
            Some(var("GOOGLE_TRANSLATE_ENDPOINT").unwrap_or_else(|| DEFAULT_GOOGLE_ENDPOINT.to_string()))
        } else {
            None
        };

        if let Some(secs) = var("TRANSLATION_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_number("TRANSLATION_TIMEOUT_SECS", &secs)?);
        }
        if let Some(size) = var("TRANSLATION_MAX_CHUNK_SIZE") {
            config.max_chunk_size = parse_number("TRANSLATION_MAX_CHUNK_SIZE", &size)?;
        }
        if let Some(threshold) = var("TRANSLATION_SHORT_TEXT_THRESHOLD") {
            config.short_text_threshold = parse_number("TRANSLATION_SHORT_TEXT_THRESHOLD", &threshold)?;
        }

        Ok(config)
    }

    pub fn with_libre_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.libre_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_fallback_endpoints(mut self, endpoints: Vec<String>) -> Self {
        self.libre_fallback_endpoints = endpoints;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.libre_api_key = Some(api_key.into());
        self
    }

    pub fn with_google_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.google_endpoint = Some(endpoint.into());
        self
    }

    pub fn without_google(mut self) -> Self {
        self.google_endpoint = None;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    pub fn with_short_text_threshold(mut self, threshold: usize) -> Self {
        self.short_text_threshold = threshold;
        self
    }

    pub fn with_scores(mut self, scores: MatchScores) -> Self {
        self.scores = scores;
        self
    }

    /// Primary endpoint followed by the fallbacks, without duplicates
    pub fn libre_endpoints(&self) -> Vec<String> {
        let mut endpoints: Vec<String> = Vec::new();
        for endpoint in self.libre_endpoint.iter().chain(&self.libre_fallback_endpoints) {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() && !endpoints.iter().any(|e| e == endpoint) {
                endpoints.push(endpoint.to_string());
            }
        }
        endpoints
    }
}

/// Load idiom tables from `IDIOM_DATA_PATH` when set, else the built-in ones
pub fn load_idiom_store() -> MtResult<IdiomStore> {
    match std::env::var("IDIOM_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => load_idiom_store_from(Path::new(path.trim())),
        _ => Ok(IdiomStore::builtin()),
    }
}

pub fn load_idiom_store_from(path: &Path) -> MtResult<IdiomStore> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        MtError::ConfigError(format!("Cannot read idiom data {}: {}", path.display(), e))
    })?;
    let store = IdiomStore::from_json(&json)?;
    info!(path = %path.display(), idioms = store.len(), "Loaded idiom data");
    Ok(store)
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> MtResult<T> {
    value
        .parse()
        .map_err(|_| MtError::ConfigError(format!("{} must be a non-negative integer, got '{}'", key, value)))
}
