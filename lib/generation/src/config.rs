//! Configuration for the generation client.
//!
//! Fields with defaults can be omitted when loading from environment variables.

use serde::Deserialize;
use std::time::Duration;

/// Configuration for the remote generation API.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Bearer token sent with every request.
    pub api_token: String,
    /// Endpoint that accepts new generation jobs.
    pub submit_url: String,
    /// Status URL base; the job id is appended verbatim.
    pub status_url: String,
    /// Model named in image requests.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature for text requests.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum output tokens for text requests.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Number of status requests before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before each status request, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Timeout applied to each HTTP request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_max_attempts() -> u32 {
    15
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl GenerationConfig {
    /// Creates a configuration with defaults for optional fields.
    #[must_use]
    pub fn new(
        api_token: impl Into<String>,
        submit_url: impl Into<String>,
        status_url: impl Into<String>,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            submit_url: submit_url.into(),
            status_url: status_url.into(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            max_attempts: default_max_attempts(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Sets the poll budget.
    #[must_use]
    pub fn with_polling(mut self, max_attempts: u32, interval: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.poll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Returns the delay before each status request.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Returns the per-request HTTP timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the status URL for a job.
    #[must_use]
    pub fn status_url_for(&self, job_id: &str) -> String {
        format!("{}{}", self.status_url, job_id)
    }
}
