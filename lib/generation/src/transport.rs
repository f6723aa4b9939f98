//! Transport abstraction for the generation API.
//!
//! The client talks to the remote service only through [`JobTransport`],
//! which allows testing the poll loop without a network.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::request::ChatRequest;
use async_trait::async_trait;
use genrelay_core::JobId;
use serde_json::Value as JsonValue;
use tracing::instrument;

/// Longest slice of an error body kept in a transport error.
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Trait for the two endpoints of the generation API.
#[async_trait]
pub trait JobTransport: Send + Sync {
    /// Posts a request to the submit endpoint and returns the parsed body.
    async fn submit(&self, request: &ChatRequest) -> Result<JsonValue, GenerationError>;

    /// Fetches the status body of a job.
    async fn status(&self, job_id: &JobId) -> Result<JsonValue, GenerationError>;
}

/// HTTP transport using reqwest with bearer authentication.
#[derive(Debug, Clone)]
pub struct HttpJobTransport {
    http: reqwest::Client,
    config: GenerationConfig,
}

impl HttpJobTransport {
    /// Creates a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be built.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| GenerationError::transport(format!("HTTP client error: {e}")))?;
        Ok(Self { http, config })
    }

    async fn read_json(response: reqwest::Response) -> Result<JsonValue, GenerationError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::transport(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(GenerationError::Transport {
                status: Some(status.as_u16()),
                reason: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| GenerationError::protocol(format!("invalid JSON body: {e}")))
    }
}

#[async_trait]
impl JobTransport for HttpJobTransport {
    #[instrument(skip_all, fields(url = %self.config.submit_url, image = request.has_image()))]
    async fn submit(&self, request: &ChatRequest) -> Result<JsonValue, GenerationError> {
        let response = self
            .http
            .post(&self.config.submit_url)
            .bearer_auth(&self.config.api_token)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::transport(e.to_string()))?;

        Self::read_json(response).await
    }

    #[instrument(skip_all, fields(job_id = %job_id))]
    async fn status(&self, job_id: &JobId) -> Result<JsonValue, GenerationError> {
        let response = self
            .http
            .get(self.config.status_url_for(job_id.as_str()))
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(|e| GenerationError::transport(e.to_string()))?;

        Self::read_json(response).await
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
