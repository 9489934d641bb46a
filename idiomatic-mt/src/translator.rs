//! Machine translation provider trait
//!
//! The orchestrator only talks to providers through [`MachineTranslator`],
//! so real network backends and the deterministic mock are interchangeable.
//!
//! # Example
//!
//! ```ignore
//! use idiomatic::Language;
//! use idiomatic_mt::{LibreTranslateProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = LibreTranslateProvider::new(
//!         "http://localhost:5000/translate",
//!         None,
//!         std::time::Duration::from_secs(20),
//!     )?;
//!     let result = provider
//!         .translate("Hello, world!", Language::English, Language::French)
//!         .await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::error::MtResult;
use async_trait::async_trait;
use idiomatic::Language;

/// Generic trait for machine translation providers
///
/// Languages arrive already validated, so implementations only deal with
/// mapping them onto their own code conventions.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError)` - Any transport, status or response-shape failure
    async fn translate(&self, text: &str, source: Language, target: Language) -> MtResult<String>;

    /// Name used in logs to identify which provider handled a translation
    fn provider_name(&self) -> &str;
}
