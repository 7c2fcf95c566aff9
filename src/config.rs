//! Runtime configuration
//!
//! Everything that used to be a hard-coded constant (endpoint, user agent,
//! external utilities) lives here and is passed explicitly to the provider
//! and the I/O helpers.

use crate::mt::error::{MtError, MtResult};
use std::time::Duration;

/// Public `translate_a/single` endpoint used by the Google Translate web widget
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Translation endpoint without query string
    pub endpoint: String,
    /// Value of the `User-Agent` header, empty by default
    pub user_agent: String,
    pub timeout: Duration,
    /// Program and arguments that print the primary selection on stdout
    pub selection_command: Vec<String>,
    /// Program invoked as `<notify_command> <title> <body>`
    pub notify_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            selection_command: vec![
                "xsel".to_string(),
                "--output".to_string(),
                "--primary".to_string(),
            ],
            notify_command: "notify-send".to_string(),
        }
    }
}

impl Config {
    /// Build a configuration from the defaults and the process environment
    ///
    /// Recognised variables:
    ///
    /// * `XTRANSLATE_ENDPOINT` - alternative endpoint URL
    /// * `XTRANSLATE_USER_AGENT` - value of the `User-Agent` header
    /// * `XTRANSLATE_TIMEOUT_SECS` - request timeout in whole seconds
    ///
    /// # Errors
    ///
    /// `MtError::Config` if a variable is set but unusable.
    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> MtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("XTRANSLATE_ENDPOINT") {
            if endpoint.trim().is_empty() {
                return Err(MtError::Config(
                    "XTRANSLATE_ENDPOINT cannot be empty".to_string(),
                ));
            }
            config.endpoint = endpoint;
        }

        if let Some(user_agent) = lookup("XTRANSLATE_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Some(raw) = lookup("XTRANSLATE_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                MtError::Config(format!(
                    "XTRANSLATE_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_selection_command(mut self, command: Vec<String>) -> Self {
        self.selection_command = command;
        self
    }

    pub fn with_notify_command(mut self, command: impl Into<String>) -> Self {
        self.notify_command = command.into();
        self
    }
}
