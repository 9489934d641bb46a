//! Translation orchestration
//!
//! [`TranslationOrchestrator::translate`] decides how a text gets
//! translated and always produces a [`TranslationResult`]:
//!
//! 1. Empty input gives an empty result tagged `none`.
//! 2. Same source and target language is an explanation request.
//! 3. Hinted or short texts are looked up in the idiom tables; hinted texts
//!    additionally go through the long-text scanner and aggressive search.
//! 4. Otherwise the LibreTranslate endpoints are tried in priority order,
//!    then the secondary provider. Texts longer than the chunk size are
//!    split and translated chunk by chunk.
//! 5. When every network path fails the offline dictionary answers.
//!
//! Provider failures are logged and move the request to the next tier;
//! nothing in here returns an error to the caller.

use crate::config::TranslatorConfig;
use crate::error::{MtError, MtResult};
use crate::google_translate::GoogleTranslateProvider;
use crate::libre_translate::LibreTranslateProvider;
use crate::translator::MachineTranslator;
use idiomatic::{
    AggressiveStage, CoreResult, FallbackDictionary, IdiomEntry, IdiomMatcher, IdiomStore,
    Language, MatchScores, MatchType, TranslationMethod, TranslationResult, aggressive_search,
    explain, scan_for_idiom, split_into_chunks,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// A LibreTranslate-compatible endpoint and its position in the configured
/// priority list
///
/// Position 0 is the primary endpoint. Positions are kept even when an
/// earlier endpoint was skipped, so a fallback never answers as the primary.
struct LibreEndpoint {
    position: usize,
    provider: Arc<dyn MachineTranslator>,
}

impl LibreEndpoint {
    fn method(&self) -> TranslationMethod {
        if self.position == 0 {
            TranslationMethod::LibreTranslate
        } else {
            TranslationMethod::LibreTranslateFallback
        }
    }
}

/// How far down the provider chain a method sits
fn provider_rank(method: TranslationMethod) -> u8 {
    match method {
        TranslationMethod::LibreTranslate => 0,
        TranslationMethod::LibreTranslateFallback => 1,
        _ => 2,
    }
}

pub struct TranslationOrchestrator {
    store: Arc<RwLock<IdiomStore>>,
    dictionary: FallbackDictionary,
    /// Primary LibreTranslate endpoint first, then fallbacks
    libre_endpoints: Vec<LibreEndpoint>,
    secondary: Option<Arc<dyn MachineTranslator>>,
    scores: MatchScores,
    timeout: Duration,
    max_chunk_size: usize,
    short_text_threshold: usize,
}

impl TranslationOrchestrator {
    /// Orchestrator over `store` with no network providers, the built-in
    /// dictionary and default settings
    pub fn new(store: IdiomStore) -> Self {
        let defaults = TranslatorConfig::default();
        Self {
            store: Arc::new(RwLock::new(store)),
            dictionary: FallbackDictionary::builtin(),
            libre_endpoints: Vec::new(),
            secondary: None,
            scores: defaults.scores,
            timeout: defaults.timeout,
            max_chunk_size: defaults.max_chunk_size,
            short_text_threshold: defaults.short_text_threshold,
        }
    }

    /// Build the providers described by `config`
    ///
    /// Endpoints with a malformed URL are logged and skipped. The remaining
    /// endpoints keep their configured position.
    ///
    /// # Errors
    ///
    /// Only when an HTTP client cannot be created.
    pub fn from_config(config: &TranslatorConfig, store: IdiomStore) -> MtResult<Self> {
        let mut orchestrator = Self::new(store)
            .with_scores(config.scores.clone())
            .with_timeout(config.timeout)
            .with_max_chunk_size(config.max_chunk_size)
            .with_short_text_threshold(config.short_text_threshold);

        for (position, endpoint) in config.libre_endpoints().into_iter().enumerate() {
            match LibreTranslateProvider::new(&endpoint, config.libre_api_key.clone(), config.timeout) {
                Ok(provider) => orchestrator.libre_endpoints.push(LibreEndpoint {
                    position,
                    provider: Arc::new(provider),
                }),
                Err(MtError::ConfigError(msg)) => {
                    warn!(endpoint = endpoint.as_str(), position, "Skipping LibreTranslate endpoint: {}", msg)
                }
                Err(e) => return Err(e),
            }
        }

        if let Some(endpoint) = &config.google_endpoint {
            match GoogleTranslateProvider::new(endpoint, config.timeout) {
                Ok(provider) => orchestrator = orchestrator.with_secondary(Arc::new(provider)),
                Err(MtError::ConfigError(msg)) => {
                    warn!(endpoint = endpoint.as_str(), "Skipping Google Translate: {}", msg)
                }
                Err(e) => return Err(e),
            }
        }

        Ok(orchestrator)
    }

    /// Append a LibreTranslate-compatible endpoint after the existing ones;
    /// the first one added is the primary
    pub fn with_libre_endpoint(mut self, provider: Arc<dyn MachineTranslator>) -> Self {
        let position = self.libre_endpoints.last().map_or(0, |e| e.position + 1);
        self.libre_endpoints.push(LibreEndpoint { position, provider });
        self
    }

    /// Provider of last resort, tried after every LibreTranslate endpoint
    pub fn with_secondary(mut self, provider: Arc<dyn MachineTranslator>) -> Self {
        self.secondary = Some(provider);
        self
    }

    pub fn with_dictionary(mut self, dictionary: FallbackDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_scores(mut self, scores: MatchScores) -> Self {
        self.scores = scores;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size.max(1);
        self
    }

    pub fn with_short_text_threshold(mut self, threshold: usize) -> Self {
        self.short_text_threshold = threshold;
        self
    }

    /// Translate `text`, never failing
    ///
    /// `contains_idioms` is the caller's hint that the text holds idioms;
    /// it enables the expensive scanning and aggressive search stages.
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
        contains_idioms: bool,
    ) -> TranslationResult {
        if text.trim().is_empty() {
            debug!("Empty input, nothing to translate");
            return TranslationResult::empty();
        }

        let length = text.chars().count();
        info!(%source, %target, text_length = length, contains_idioms, "Translating text");

        if source == target {
            let store = self.store.read().await;
            return explain(&IdiomMatcher::new(&store, &self.scores), text, source);
        }

        if let Some(result) = self.idiom_lookup(text, source, target, contains_idioms).await {
            return result;
        }

        if self.libre_endpoints.is_empty() {
            warn!("LibreTranslate endpoint not configured - check your settings");
        }

        let translated = if length > self.max_chunk_size {
            self.translate_chunked(text, source, target, contains_idioms).await
        } else {
            self.call_providers(text, source, target)
                .await
                .map(|(translated, method)| {
                    TranslationResult::new(translated, method).with_contains_idioms(contains_idioms)
                })
        };
        translated.unwrap_or_else(|| self.dictionary_fallback(text, source, target, contains_idioms))
    }

    /// Idiom tables tier, consulted for hinted or short texts of any length
    async fn idiom_lookup(
        &self,
        text: &str,
        source: Language,
        target: Language,
        hinted: bool,
    ) -> Option<TranslationResult> {
        let short = text.chars().count() < self.short_text_threshold;
        if !hinted && !short {
            return None;
        }

        let store = self.store.read().await;
        let matcher = IdiomMatcher::new(&store, &self.scores);

        if let Some(idiom) = matcher.find(text, source, target) {
            info!(
                idiom = idiom.original_idiom.as_str(),
                match_type = %idiom.match_type,
                score = idiom.score,
                "Translated through idiom database"
            );
            return Some(
                TranslationResult::new(idiom.translation.clone(), TranslationMethod::IdiomDatabase)
                    .with_idiom(idiom),
            );
        }
        if !hinted {
            return None;
        }

        if let Some(outcome) = scan_for_idiom(&matcher, text, source, target) {
            info!(
                idiom = outcome.idiom.original_idiom.as_str(),
                stage = ?outcome.stage,
                "Found idiom inside longer text"
            );
            return Some(
                TranslationResult::new(outcome.text, TranslationMethod::IdiomDatabasePartial)
                    .with_idiom(outcome.idiom),
            );
        }

        let hit = aggressive_search(&matcher, text, source, target)?;
        let method = match hit.stage {
            AggressiveStage::GapPattern => TranslationMethod::IdiomAggressiveSearch,
            AggressiveStage::WordOverlap => TranslationMethod::IdiomWordOverlap,
            AggressiveStage::FlexiblePattern => TranslationMethod::IdiomPatternMatch,
        };
        info!(idiom = hit.idiom.original_idiom.as_str(), %method, "Found idiom by aggressive search");
        Some(TranslationResult::new(hit.idiom.translation.clone(), method).with_idiom(hit.idiom))
    }

    /// Split a long text that the idiom tier did not resolve and translate
    /// the chunks
    ///
    /// When hinted, chunks that are idioms in their entirety come from the
    /// idiom tables. Every other chunk walks the provider chain on its own,
    /// so a chunk that fails on the primary endpoint does not send the
    /// chunks it already translated to the next endpoint again.
    async fn translate_chunked(
        &self,
        text: &str,
        source: Language,
        target: Language,
        hinted: bool,
    ) -> Option<TranslationResult> {
        let chunks = split_into_chunks(text, self.max_chunk_size);
        info!(chunks = chunks.len(), max_chunk_size = self.max_chunk_size, "Translating in chunks");

        let mut resolved: Vec<Option<String>> = vec![None; chunks.len()];
        if hinted {
            let store = self.store.read().await;
            let matcher = IdiomMatcher::new(&store, &self.scores);
            for (slot, chunk) in resolved.iter_mut().zip(&chunks) {
                // Only whole-chunk hits; a contained match would drop the rest of the chunk
                if let Some(idiom) = matcher
                    .find(chunk, source, target)
                    .filter(|m| matches!(m.match_type, MatchType::Exact | MatchType::Variation))
                {
                    debug!(idiom = idiom.original_idiom.as_str(), "Chunk is an idiom");
                    *slot = Some(idiom.translation);
                }
            }
        }
        let idiom_chunks = resolved.iter().filter(|slot| slot.is_some()).count();

        let mut provider_method: Option<TranslationMethod> = None;
        for (slot, chunk) in resolved.iter_mut().zip(&chunks) {
            if slot.is_some() {
                continue;
            }
            let Some((translated, method)) = self.call_providers(chunk, source, target).await else {
                warn!(chunk_length = chunk.chars().count(), "No provider could translate chunk");
                return None;
            };
            *slot = Some(translated);
            if provider_method.is_none_or(|current| provider_rank(method) > provider_rank(current)) {
                provider_method = Some(method);
            }
        }

        let method = match provider_method {
            None => TranslationMethod::IdiomDatabaseDirect,
            Some(_) if idiom_chunks > 0 => TranslationMethod::MixedIdiomApi,
            Some(method) => method,
        };

        let joined = resolved.into_iter().flatten().collect::<Vec<_>>().join(" ");
        let mut result = TranslationResult::new(joined, method)
            .with_contains_idioms(hinted || idiom_chunks > 0);
        result.is_idiom = idiom_chunks > 0;
        Some(result)
    }

    /// Try the LibreTranslate endpoints in order, then the secondary provider
    async fn call_providers(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Option<(String, TranslationMethod)> {
        for endpoint in &self.libre_endpoints {
            let provider = endpoint.provider.as_ref();
            match self.call(provider, text, source, target).await {
                Ok(translated) => {
                    let method = endpoint.method();
                    info!(provider = provider.provider_name(), position = endpoint.position, %method, "Provider answered");
                    return Some((translated, method));
                }
                Err(err) => {
                    warn!(
                        provider = provider.provider_name(),
                        position = endpoint.position,
                        error = %err,
                        "LibreTranslate attempt failed"
                    );
                    if !err.allows_endpoint_fallback() {
                        debug!("Failure is not endpoint-specific, skipping remaining endpoints");
                        break;
                    }
                }
            }
        }

        let Some(secondary) = &self.secondary else {
            debug!("No secondary translator configured");
            return None;
        };
        match self.call(secondary.as_ref(), text, source, target).await {
            Ok(translated) => {
                info!(provider = secondary.provider_name(), "Secondary provider answered");
                Some((translated, TranslationMethod::GoogleTranslateApi))
            }
            Err(err) => {
                warn!(provider = secondary.provider_name(), error = %err, "Secondary provider failed");
                None
            }
        }
    }

    /// One request bounded by the configured timeout
    async fn call(
        &self,
        provider: &dyn MachineTranslator,
        text: &str,
        source: Language,
        target: Language,
    ) -> MtResult<String> {
        tokio::time::timeout(self.timeout, provider.translate(text, source, target))
            .await
            .map_err(|_| {
                MtError::Timeout(format!(
                    "{} did not answer within {:?}",
                    provider.provider_name(),
                    self.timeout
                ))
            })?
    }

    fn dictionary_fallback(
        &self,
        text: &str,
        source: Language,
        target: Language,
        hinted: bool,
    ) -> TranslationResult {
        let lookup = self.dictionary.translate(text, source, target);
        info!(coverage = ?lookup.coverage, "Falling back to offline dictionary");
        TranslationResult::new(lookup.text, TranslationMethod::FallbackDictionary)
            .with_contains_idioms(hinted)
    }

    /// Insert or overwrite one idiom translation
    ///
    /// Takes the store's write lock, so concurrent translations see either
    /// the old or the new table, never a partial update.
    pub async fn add_idiom(
        &self,
        phrase: &str,
        source: Language,
        target: Language,
        translation: &str,
    ) -> CoreResult<()> {
        let mut store = self.store.write().await;
        store.add_idiom(phrase, source, target, translation)?;
        info!(%source, %target, phrase = phrase.trim(), "Idiom added");
        Ok(())
    }

    /// Idioms for a source language, in table order
    pub async fn idioms(&self, source: Language) -> Vec<IdiomEntry> {
        self.store.read().await.idioms(source).to_vec()
    }

    /// Source languages that have idioms
    pub async fn idiom_languages(&self) -> Vec<Language> {
        self.store.read().await.languages()
    }
}

impl std::fmt::Debug for TranslationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoints: Vec<(usize, &str)> = self
            .libre_endpoints
            .iter()
            .map(|e| (e.position, e.provider.provider_name()))
            .collect();
        f.debug_struct("TranslationOrchestrator")
            .field("libre_endpoints", &endpoints)
            .field("secondary", &self.secondary.as_ref().map(|p| p.provider_name()))
            .field("timeout", &self.timeout)
            .field("max_chunk_size", &self.max_chunk_size)
            .field("short_text_threshold", &self.short_text_threshold)
            .finish()
    }
}
