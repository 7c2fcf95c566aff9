//! Google Translate provider
//!
//! Talks to the keyless `translate_a/single` endpoint used by the Google
//! Translate web widget. Two sections are requested: `dt=t` for the
//! translated sentence and `dt=bd` for the dictionary breakdown.
//!
//! # Example
//!
//! ```ignore
//! use xtranslate::config::Config;
//! use xtranslate::mt::{GoogleTranslateProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::new(Config::from_env()?)?;
//!     let result = provider.translate("Hello, world!", "en", "fr").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::config::Config;
use crate::mt::error::{MtError, MtResult};
use crate::mt::response::TranslationResponse;
use crate::mt::translator::{MachineTranslator, validate_language};
use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::USER_AGENT;
use tracing::{debug, warn};

/// Google Translate provider for the keyless web endpoint
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    /// HTTP client for async requests
    client: reqwest::Client,
    config: Config,
}

impl GoogleTranslateProvider {
    /// Create a provider from an explicit configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If the endpoint is empty or HTTP client creation fails
    pub fn new(config: Config) -> MtResult<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(MtError::Config("Endpoint cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MtError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the GET URL for one request
    ///
    /// Query values are form-urlencoded, so spaces become `+` and `&` in the
    /// text cannot leak into another parameter.
    pub fn request_url(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<Url> {
        Url::parse_with_params(
            &self.config.endpoint,
            &[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("dt", "bd"),
                ("q", text),
            ],
        )
        .map_err(|e| {
            MtError::Config(format!(
                "Invalid endpoint '{}': {}",
                self.config.endpoint, e
            ))
        })
    }

    /// Send the request and decode the response into its typed form
    pub async fn fetch(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<TranslationResponse> {
        let url = self.request_url(text, source_lang, target_lang)?;
        debug!(%url, "Sending translation request");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Translation API returned an error status");
            return Err(MtError::HttpStatus(format!("Google Translate: {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MtError::ResponseRead(e.to_string()))?;

        let json: serde_json::Value = serde_json::from_str(&body)?;
        let decoded = TranslationResponse::from_value(&json)?;

        debug!(
            segments = decoded.segments.len(),
            words = decoded.words.as_ref().map_or(0, Vec::len),
            "Decoded translation response"
        );

        Ok(decoded)
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("endpoint", &self.config.endpoint)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String> {
        validate_language(source_lang)?;
        validate_language(target_lang)?;

        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let response = self.fetch(text, source_lang, target_lang).await?;
        Ok(response.render())
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
