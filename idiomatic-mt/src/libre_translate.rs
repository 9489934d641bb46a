//! LibreTranslate provider
//!
//! One provider instance talks to one endpoint. The orchestrator holds the
//! primary endpoint and any fallback endpoints as separate providers and
//! walks them in priority order.
//!
//! # Wire format
//!
//! `POST <endpoint>` with a JSON body
//! `{"q": text, "source": code, "target": code, "format": "text"}` plus an
//! optional `"api_key"`. A successful answer is `{"translatedText": "..."}`;
//! any other shape, a non-2xx status or a timeout is a failure.

use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use idiomatic::Language;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a single LibreTranslate endpoint
#[derive(Clone)]
pub struct LibreTranslateProvider {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl LibreTranslateProvider {
    /// Create a provider for `endpoint`
    ///
    /// # Errors
    ///
    /// [`MtError::ConfigError`] if the endpoint is empty or not a URL,
    /// [`MtError::NetworkError`] if the HTTP client cannot be built.
    pub fn new(endpoint: &str, api_key: Option<String>, timeout: Duration) -> MtResult<Self> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(MtError::ConfigError(
                "LibreTranslate endpoint cannot be empty".to_string(),
            ));
        }
        reqwest::Url::parse(endpoint).map_err(|e| {
            MtError::ConfigError(format!("Invalid LibreTranslate endpoint '{}': {}", endpoint, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(&self, text: &str, source: Language, target: Language) -> serde_json::Value {
        let mut body = json!({
            "q": text,
            "source": language_code(source),
            "target": language_code(target),
            "format": "text"
        });
        if let Some(api_key) = &self.api_key {
            body["api_key"] = serde_json::Value::String(api_key.clone());
        }
        body
    }
}

/// LibreTranslate names Chinese plain `zh`
fn language_code(language: Language) -> &'static str {
    match language {
        Language::Chinese => "zh",
        other => other.code(),
    }
}

/// Extract the translation from a LibreTranslate response body
fn parse_response(body: &str) -> MtResult<String> {
    serde_json::from_str::<LibreTranslateResponse>(body)
        .map(|response| response.translated_text)
        .map_err(|e| {
            MtError::InvalidResponse(format!("Missing 'translatedText' in LibreTranslate response: {}", e))
        })
}

impl std::fmt::Debug for LibreTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibreTranslateProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for LibreTranslateProvider {
    async fn translate(&self, text: &str, source: Language, target: Language) -> MtResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        debug!(
            endpoint = self.endpoint.as_str(),
            %source,
            %target,
            text_length = text.len(),
            "Sending LibreTranslate request"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.request_body(text, source, target))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(MtError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        parse_response(&body)
    }

    fn provider_name(&self) -> &str {
        "LibreTranslate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: Option<&str>) -> LibreTranslateProvider {
        LibreTranslateProvider::new(
            "http://localhost:5000/translate",
            api_key.map(str::to_string),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_valid_endpoint() {
        let provider = provider(None);
        assert_eq!(provider.endpoint(), "http://localhost:5000/translate");
        assert_eq!(provider.provider_name(), "LibreTranslate");
    }

    #[test]
    fn test_new_with_empty_endpoint() {
        match LibreTranslateProvider::new("  ", None, Duration::from_secs(5)) {
            Err(MtError::ConfigError(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_new_with_malformed_endpoint() {
        let result = LibreTranslateProvider::new("not a url", None, Duration::from_secs(5));
        assert!(matches!(result, Err(MtError::ConfigError(_))));
    }

    // ========== Request / Response Tests ==========

    #[test]
    fn test_request_body_without_key() {
        let body = provider(None).request_body("Hello", Language::English, Language::French);
        assert_eq!(
            body,
            json!({"q": "Hello", "source": "en", "target": "fr", "format": "text"})
        );
    }

    #[test]
    fn test_request_body_with_key() {
        let body = provider(Some("secret")).request_body("Hi", Language::English, Language::Chinese);
        assert_eq!(body["api_key"], "secret");
        assert_eq!(body["target"], "zh");
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let body = provider(Some("  ")).request_body("Hi", Language::English, Language::German);
        assert!(body.get("api_key").is_none());
    }

    #[test]
    fn test_parse_response() {
        assert_eq!(
            parse_response(r#"{"translatedText": "Bonjour"}"#).unwrap(),
            "Bonjour"
        );
        assert!(matches!(
            parse_response(r#"{"error": "oops"}"#),
            Err(MtError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_response("<html>Bad gateway</html>"),
            Err(MtError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_translate_empty_text() {
        let result = provider(None)
            .translate("", Language::English, Language::French)
            .await
            .unwrap();
        assert_eq!(result, "");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        // Port 9 (discard) is not expected to run an HTTP server
        let provider =
            LibreTranslateProvider::new("http://127.0.0.1:9/translate", None, Duration::from_secs(2))
                .unwrap();
        let err = provider
            .translate("hello", Language::English, Language::French)
            .await
            .unwrap_err();
        assert!(err.allows_endpoint_fallback(), "unexpected error {:?}", err);
    }

    // ========== Debug Implementation Test ==========

    #[test]
    fn test_debug_output() {
        let debug_str = format!("{:?}", provider(Some("secret-key")));
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("secret-key"));
    }

    // ========== Live Tests (require a LibreTranslate endpoint) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_endpoint_translation() {
        let Ok(endpoint) = std::env::var("LIBRE_TRANSLATE_ENDPOINT") else {
            eprintln!("Skipping: LIBRE_TRANSLATE_ENDPOINT not set");
            return;
        };
        let api_key = std::env::var("LIBRE_TRANSLATE_API_KEY").ok();
        let provider = LibreTranslateProvider::new(&endpoint, api_key, Duration::from_secs(20)).unwrap();
        let result = provider
            .translate("Hello", Language::English, Language::Spanish)
            .await
            .unwrap();
        println!("Translation: Hello → {}", result);
        assert!(!result.is_empty());
    }
}
