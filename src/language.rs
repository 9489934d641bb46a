//! Supported languages and language-code handling
//!
//! Every lookup in the engine is keyed by [`Language`] rather than by raw
//! strings, so unknown or malformed codes are rejected where they enter the
//! system instead of silently producing "no match" deep inside matching.
//!
//! # Example
//!
//! ```ignore
//! use idiomatic::Language;
//!
//! let lang: Language = "en-GB".parse()?;
//! assert_eq!(lang, Language::English);
//! assert_eq!(lang.code(), "en");
//! ```

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A language the translation engine knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Japanese,
    Chinese,
    Arabic,
    Hindi,
}

impl Language {
    /// All supported languages, in catalogue order
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
        Language::Japanese,
        Language::Chinese,
        Language::Arabic,
        Language::Hindi,
    ];

    /// Catalogue code, as persisted by callers and sent to providers
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Japanese => "ja",
            Language::Chinese => "zh-CN",
            Language::Arabic => "ar",
            Language::Hindi => "hi",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese (Simplified)",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Italian => "Italiano",
            Language::Portuguese => "Português",
            Language::Russian => "Русский",
            Language::Japanese => "日本語",
            Language::Chinese => "中文 (简体)",
            Language::Arabic => "العربية",
            Language::Hindi => "हिन्दी",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    /// Parses a language code, accepting regional variants (`en-US`, `pt_BR`)
    fn from_str(code: &str) -> CoreResult<Self> {
        validate_locale(code)?;

        match normalize_locale(code).as_str() {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            "fr" => Ok(Language::French),
            "de" => Ok(Language::German),
            "it" => Ok(Language::Italian),
            "pt" => Ok(Language::Portuguese),
            "ru" => Ok(Language::Russian),
            "ja" => Ok(Language::Japanese),
            "zh" => Ok(Language::Chinese),
            "ar" => Ok(Language::Arabic),
            "hi" => Ok(Language::Hindi),
            _ => Err(CoreError::UnsupportedLanguage(code.to_string())),
        }
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize a locale code by stripping region or script information
///
/// - `en-US` → `en`
/// - `zh-CN` → `zh`
/// - `pt_BR` → `pt`
/// - `EN` → `en`
pub fn normalize_locale(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_lowercase()
}

/// Check that a locale code only contains characters a locale code can have
///
/// Alphanumerics, hyphens and underscores are accepted; anything else, or an
/// empty code, is rejected with [`CoreError::InvalidLanguage`].
pub fn validate_locale(locale: &str) -> CoreResult<()> {
    if locale.is_empty() {
        return Err(CoreError::InvalidLanguage(
            "Locale code is empty".to_string(),
        ));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::InvalidLanguage(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}
