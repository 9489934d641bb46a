//! Machine translation support for idiomatic
//!
//! This crate wires network translators around the synchronous idiom engine
//! and falls back across them:
//! idiom tables → LibreTranslate (primary, then fallback endpoints) →
//! Google Translate → offline dictionary.
//!
//! # Workflow Example
//!
//! ```ignore
//! use idiomatic::{IdiomStore, Language};
//! use idiomatic_mt::{TranslationOrchestrator, TranslatorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TranslatorConfig::from_env()?;
//!     let orchestrator = TranslationOrchestrator::from_config(&config, IdiomStore::builtin())?;
//!
//!     let result = orchestrator
//!         .translate("Break a leg!", Language::English, Language::French, true)
//!         .await;
//!
//!     println!("{} ({})", result.translated_text, result.translation_method);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod google_translate;
pub mod libre_translate;
pub mod mock;
pub mod orchestrator;
pub mod translator;


// Re-export main types for convenient access
pub use config::{
    DEFAULT_MAX_CHUNK_SIZE, DEFAULT_SHORT_TEXT_THRESHOLD, DEFAULT_TIMEOUT_SECS, TranslatorConfig,
    load_idiom_store, load_idiom_store_from,
};
pub use error::{MtError, MtResult};
pub use google_translate::{DEFAULT_GOOGLE_ENDPOINT, GoogleTranslateProvider};
pub use libre_translate::LibreTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use orchestrator::TranslationOrchestrator;
pub use translator::MachineTranslator;
