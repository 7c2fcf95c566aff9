//! Mock translator for testing
//!
//! Deterministic, network-free stand-in for [`GoogleTranslateProvider`] so the
//! read → translate → emit pipeline can be tested offline.
//!
//! [`GoogleTranslateProvider`]: crate::mt::GoogleTranslateProvider
//!
//! # Example
//!
//! ```ignore
//! use xtranslate::mt::{MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "en", "fr").await.unwrap();
//!     assert_eq!(result, "hello_fr");
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::response::flatten_response;
use crate::mt::translator::{MachineTranslator, validate_language};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target language suffix: "hello" → "hello_fr"
    Suffix,

    /// Predefined mappings: (text, target_lang) → display string,
    /// falling back to `Suffix` for unknown pairs
    Mappings(HashMap<(String, String), String>),

    /// Answer every request with this raw API response, flattened
    Canned(Value),

    /// Simulate API errors
    Error(MtError),
}

/// Mock translator that simulates various translation scenarios
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self { mode }
    }

    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Canned(raw) => flatten_response(raw),
            MockMode::Error(err) => Err(err.clone()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String> {
        validate_language(source_lang)?;
        validate_language(target_lang)?;
        self.apply_translation(text, target_lang)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_suffix_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.translate("hello", "en", "fr").await.unwrap(), "hello_fr");
        assert_eq!(mock.translate("hello", "en", "ru").await.unwrap(), "hello_ru");
    }

    #[tokio::test]
    async fn test_mapping_translation() {
        let mut map = HashMap::new();
        map.insert(
            ("cat".to_string(), "ru".to_string()),
            "кошка\nnoun: кошка, кот".to_string(),
        );

        let mock = MockTranslator::new(MockMode::Mappings(map));
        assert_eq!(
            mock.translate("cat", "en", "ru").await.unwrap(),
            "кошка\nnoun: кошка, кот"
        );
        assert_eq!(mock.translate("dog", "en", "ru").await.unwrap(), "dog_ru");
    }

    #[tokio::test]
    async fn test_canned_response_is_flattened() {
        let raw = json!([[["Bonjour"]], [["Interjection", ["Hello"]]]]);
        let mock = MockTranslator::new(MockMode::Canned(raw));
        assert_eq!(
            mock.translate("hello", "en", "fr").await.unwrap(),
            "Bonjour\ninterjection: hello"
        );
    }

    #[tokio::test]
    async fn test_canned_malformed_response() {
        let mock = MockTranslator::new(MockMode::Canned(json!([[[]]])));
        let result = mock.translate("hello", "en", "fr").await;
        assert!(matches!(result, Err(MtError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_error_mode() {
        let err = MtError::HttpStatus("Google Translate: 503 Service Unavailable".to_string());
        let mock = MockTranslator::new(MockMode::Error(err.clone()));
        assert_eq!(mock.translate("hello", "en", "fr").await, Err(err));
    }

    #[tokio::test]
    async fn test_invalid_language_rejected() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", "en", "f r").await;
        assert!(matches!(result, Err(MtError::InvalidLanguage(_))));
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
