//! Machine translation trait and utilities
//!
//! `MachineTranslator` abstracts the backend so the CLI pipeline can run
//! against Google Translate or the deterministic mock used in tests.
//!
//! # Example
//!
//! ```ignore
//! use xtranslate::config::Config;
//! use xtranslate::mt::{GoogleTranslateProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::new(Config::default())?;
//!     let result = provider.translate("cat", "en", "ru").await?;
//!     println!("{}", result); // "кошка\nnoun: кошка, кот"
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

/// Generic trait for translation providers
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` and return the display string
    ///
    /// The display string is the primary translation, optionally followed by
    /// the lower-cased word breakdown.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_lang` - Source language code (e.g., "en", "auto")
    /// * `target_lang` - Target language code (e.g., "ru", "zh-CN")
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String>;

    /// Name of this provider, used in log lines
    fn provider_name(&self) -> &str;
}

static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:auto|[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{1,8})*)$")
        .expect("language code pattern is valid")
});

/// Validate that a language code looks like something the API accepts
///
/// Accepts `auto` and ISO 639 codes with optional subtags separated by `-`
/// or `_` (`en`, `haw`, `zh-CN`, `pt_BR`).
///
/// # Example
///
/// ```ignore
/// validate_language("en")?; // OK
/// validate_language("zh-CN")?; // OK
/// validate_language("en&tl=de").unwrap_err(); // Error
/// ```
pub fn validate_language(code: &str) -> MtResult<()> {
    if code.is_empty() {
        return Err(MtError::InvalidLanguage(
            "Language code is empty".to_string(),
        ));
    }

    if !LANGUAGE_CODE.is_match(code) {
        return Err(MtError::InvalidLanguage(format!(
            "Unsupported language code: {}",
            code
        )));
    }

    Ok(())
}
