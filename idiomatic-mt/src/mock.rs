//! Mock Machine Translator for testing
//!
//! Deterministic, network-free translator used to drive the orchestrator's
//! fallback tiers in tests and by the CLI's `--mock` flag.
//!
//! # Example
//!
//! ```ignore
//! use idiomatic::Language;
//! use idiomatic_mt::{MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", Language::English, Language::French).await.unwrap();
//!     assert_eq!(result, "hello_fr");
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use idiomatic::Language;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: "hello" → "hello_fr"
    Suffix,

    /// Predefined (text, target code) → translation, falling back to Suffix
    Mappings(HashMap<(String, String), String>),

    /// Fail with [`MtError::TranslationError`]
    Error(String),

    /// Fail with [`MtError::HttpStatus`], e.g. 503 or 400
    Status(u16),

    /// Fail with the status for texts containing the pattern, Suffix otherwise
    StatusFor(String, u16),

    /// Return the input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
///
/// Clones share the request counter, so a test can keep a handle after
/// passing the translator to an orchestrator.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Simulated network delay in milliseconds
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockTranslator with simulated network delay
    ///
    /// ```ignore
    /// let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
    /// // Each translation will take at least 50ms
    /// ```
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of texts this translator (or any clone) was asked to translate
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, target: Language) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target.code())),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.code().to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target.code())))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::Status(status) => Err(MtError::HttpStatus {
                status: *status,
                body: format!("mock status {}", status),
            }),
            MockMode::StatusFor(pattern, status) if text.contains(pattern.as_str()) => {
                Err(MtError::HttpStatus {
                    status: *status,
                    body: format!("mock status {} for {:?}", status, pattern),
                })
            }
            MockMode::StatusFor(..) => Ok(format!("{}_{}", text, target.code())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(&self, text: &str, _source: Language, target: Language) -> MtResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.apply_translation(text, target)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: Language = Language::English;
    const FR: Language = Language::French;

    // ========== Suffix Mode Tests ==========

    #[tokio::test]
    async fn test_suffix_single_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", EN, FR).await.unwrap();
        assert_eq!(result, "hello_fr");
    }

    #[tokio::test]
    async fn test_suffix_uses_full_code() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", EN, Language::Chinese).await.unwrap();
        assert_eq!(result, "hello_zh-CN");
    }

    #[tokio::test]
    async fn test_suffix_counts_each_request() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.translate("hello", EN, FR).await.unwrap(), "hello_fr");
        assert_eq!(mock.translate("world", EN, FR).await.unwrap(), "world_fr");
        assert_eq!(mock.call_count(), 2);
    }

    // ========== Mapping Mode Tests ==========

    #[tokio::test]
    async fn test_mapping_single_translation() {
        let mut map = HashMap::new();
        map.insert(("hello".to_string(), "fr".to_string()), "bonjour".to_string());

        let mock = MockTranslator::new(MockMode::Mappings(map));
        assert_eq!(mock.translate("hello", EN, FR).await.unwrap(), "bonjour");
        assert_eq!(mock.translate("unknown", EN, FR).await.unwrap(), "unknown_fr");
    }

    // ========== Failure Mode Tests ==========

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockTranslator::new(MockMode::Error("API unavailable".to_string()));
        match mock.translate("hello", EN, FR).await {
            Err(MtError::TranslationError(msg)) => assert_eq!(msg, "API unavailable"),
            other => panic!("Expected TranslationError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_status_mode_returns_http_status() {
        let mock = MockTranslator::new(MockMode::Status(503));
        let err = mock.translate("hello", EN, FR).await.unwrap_err();
        assert!(matches!(err, MtError::HttpStatus { status: 503, .. }));
        assert!(err.allows_endpoint_fallback());
    }

    #[tokio::test]
    async fn test_client_status_blocks_endpoint_fallback() {
        let mock = MockTranslator::new(MockMode::Status(400));
        let err = mock.translate("a", EN, FR).await.unwrap_err();
        assert!(!err.allows_endpoint_fallback());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_status_for_fails_only_matching_texts() {
        let mock = MockTranslator::new(MockMode::StatusFor("broken".to_string(), 503));
        assert_eq!(mock.translate("fine", EN, FR).await.unwrap(), "fine_fr");
        let err = mock.translate("a broken one", EN, FR).await.unwrap_err();
        assert!(matches!(err, MtError::HttpStatus { status: 503, .. }));
        assert_eq!(mock.call_count(), 2);
    }

    // ========== NoOp Mode Tests ==========

    #[tokio::test]
    async fn test_noop_returns_unchanged() {
        let mock = MockTranslator::new(MockMode::NoOp);
        assert_eq!(mock.translate("Hello world", EN, FR).await.unwrap(), "Hello world");
    }

    // ========== Delay Tests ==========

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
        let start = std::time::Instant::now();
        let _ = mock.translate("hello", EN, FR).await.unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[tokio::test]
    async fn test_clones_share_call_count() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let clone = mock.clone();
        clone.translate("a", EN, FR).await.unwrap();
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
