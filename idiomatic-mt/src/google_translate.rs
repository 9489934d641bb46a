//! Google Translate "gtx" endpoint provider
//!
//! The secondary, last-resort network translator. It uses the keyless
//! endpoint that browser extensions use, so it needs no credentials but
//! also carries no service guarantees.
//!
//! # Wire format
//!
//! `GET <endpoint>?client=gtx&sl=<source>&tl=<target>&dt=t&q=<text>`.
//! The answer is a nested JSON array whose first element lists
//! `[translatedFragment, originalFragment, ...]` entries; the fragments are
//! concatenated in order.

use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use idiomatic::Language;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone)]
pub struct GoogleTranslateProvider {
    endpoint: reqwest::Url,
    client: reqwest::Client,
}

impl GoogleTranslateProvider {
    /// Create a provider for `endpoint`
    ///
    /// # Errors
    ///
    /// [`MtError::ConfigError`] if the endpoint is not a URL,
    /// [`MtError::NetworkError`] if the HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> MtResult<Self> {
        let endpoint = reqwest::Url::parse(endpoint.trim()).map_err(|e| {
            MtError::ConfigError(format!("Invalid Google Translate endpoint '{}': {}", endpoint, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn request_url(&self, text: &str, source: Language, target: Language) -> MtResult<reqwest::Url> {
        reqwest::Url::parse_with_params(
            self.endpoint.as_str(),
            &[
                ("client", "gtx"),
                ("sl", source.code()),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| MtError::ConfigError(format!("Failed to build request URL: {}", e)))
    }
}

/// Concatenate the translated fragments of a gtx response body
fn parse_response(body: &str) -> MtResult<String> {
    let json: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| MtError::InvalidResponse(format!("Response is not JSON: {}", e)))?;

    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| MtError::InvalidResponse("Missing translation segments".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translated.is_empty() {
        return Err(MtError::InvalidResponse(
            "Translation segments contained no text".to_string(),
        ));
    }
    Ok(translated)
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(&self, text: &str, source: Language, target: Language) -> MtResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let url = self.request_url(text, source, target)?;
        debug!(%source, %target, text_length = text.len(), "Sending Google Translate request");
        let response = self.client.get(url).send().await?;

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
        "Google Translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GoogleTranslateProvider {
        GoogleTranslateProvider::new(DEFAULT_GOOGLE_ENDPOINT, Duration::from_secs(5)).unwrap()
    }

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_default_endpoint() {
        let provider = provider();
        assert_eq!(provider.endpoint(), DEFAULT_GOOGLE_ENDPOINT);
        assert_eq!(provider.provider_name(), "Google Translate");
    }

    #[test]
    fn test_new_with_malformed_endpoint() {
        let result = GoogleTranslateProvider::new("::nope::", Duration::from_secs(5));
        assert!(matches!(result, Err(MtError::ConfigError(_))));
    }

    // ========== Request Tests ==========

    #[test]
    fn test_request_url_parameters() {
        let url = provider()
            .request_url("Hello & bye", Language::English, Language::Chinese)
            .unwrap();
        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            params,
            vec![
                ("client".to_string(), "gtx".to_string()),
                ("sl".to_string(), "en".to_string()),
                ("tl".to_string(), "zh-CN".to_string()),
                ("dt".to_string(), "t".to_string()),
                ("q".to_string(), "Hello & bye".to_string()),
            ]
        );
        assert!(url.as_str().starts_with(DEFAULT_GOOGLE_ENDPOINT));
    }

    // ========== Response Parsing Tests ==========

    #[test]
    fn test_parse_response_concatenates_segments() {
        let body = r#"[[["Bonjour. ","Hello. ",null,null,10],["Au revoir.","Goodbye.",null,null,10]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "Bonjour. Au revoir.");
    }

    #[test]
    fn test_parse_response_skips_non_text_segments() {
        let body = r#"[[["Hola",  "Hello"],[null, null, "Olá"]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "Hola");
    }

    #[test]
    fn test_parse_response_rejects_bad_shapes() {
        assert!(matches!(parse_response("not json"), Err(MtError::InvalidResponse(_))));
        assert!(matches!(parse_response("{}"), Err(MtError::InvalidResponse(_))));
        assert!(matches!(parse_response("[[]]"), Err(MtError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_translate_empty_text() {
        let result = provider()
            .translate("", Language::English, Language::French)
            .await
            .unwrap();
        assert_eq!(result, "");
    }

    // ========== Live Tests (require network access) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_single_translation() {
        if std::env::var("GOOGLE_TRANSLATE_ENABLED").is_ok_and(|v| v == "false") {
            eprintln!("Skipping: GOOGLE_TRANSLATE_ENABLED=false");
            return;
        }
        let result = provider()
            .translate("Good morning", Language::English, Language::French)
            .await
            .unwrap();
        println!("Translation: Good morning → {}", result);
        assert!(!result.is_empty());
    }
}
