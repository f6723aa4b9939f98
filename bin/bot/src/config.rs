//! Centralized bot configuration.
//!
//! This module provides strongly-typed configuration for the relay,
//! loaded via the `config` crate from environment variables. Nested keys
//! use `__` as the separator, e.g. `TELEGRAM__BOT_TOKEN`.
//!
//! See [`GenerationConfig`] for the generation API settings.

use genrelay_conversation::DEFAULT_HISTORY_LIMIT;
use genrelay_generation::GenerationConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Relay configuration composed from library configs.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Telegram Bot API configuration.
    pub telegram: TelegramConfig,

    /// Generation API configuration.
    pub generation: GenerationConfig,

    /// Turns kept per user.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Where to write the image request debug artifact. Disabled when unset.
    #[serde(default)]
    pub debug_artifact_path: Option<PathBuf>,
}

/// Telegram-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot access token from BotFather.
    pub bot_token: String,

    /// Bot API base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Long-poll timeout for `getUpdates`, in seconds.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout_secs() -> u64 {
    30
}

impl TelegramConfig {
    /// Creates a configuration with defaults for optional fields.
    #[must_use]
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_base: default_api_base(),
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }

    /// Returns the long-poll timeout.
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }

    /// Returns the URL of a Bot API method.
    #[must_use]
    pub fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }

    /// Returns the download URL of a file path obtained from `getFile`.
    #[must_use]
    pub fn file_url(&self, file_path: &str) -> String {
        format!(
            "{}/file/bot{}/{file_path}",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::default())
    }

    fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.separator("__"))
            .build()?
            .try_deserialize()
    }
}
