//! The generation client.
//!
//! Turns a [`Prompt`] into text through the two-phase remote protocol:
//!
//! 1. `submit` posts the request body and obtains a job id
//! 2. `poll` requests the job status at a fixed interval until the job
//!    succeeds, fails, or the attempt budget runs out
//!
//! Every call returns a `Result<_, GenerationError>`; polling and response
//! shape variance stay hidden from callers.

use crate::config::GenerationConfig;
use crate::diagnostics::{Diagnostics, NoopDiagnostics};
use crate::error::GenerationError;
use crate::extract::{ExtractionStrategy, extract_text};
use crate::job::{Job, JobState, JobStatus};
use crate::prompt::Prompt;
use crate::request::ChatRequest;
use crate::transport::{HttpJobTransport, JobTransport};
use async_trait::async_trait;
use genrelay_core::JobId;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Field of the submit response carrying the job id.
const REQUEST_ID_FIELD: &str = "request_id";

/// Reason reported when the remote service marks a job as failed.
const FAILED_REASON: &str = "request not completed";

/// Trait for anything that can turn a prompt into generated text.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generates text for the prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] describing why no text was produced.
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;
}

/// Client for the submit/poll generation API.
pub struct GenerationClient<T: JobTransport = HttpJobTransport> {
    transport: T,
    config: GenerationConfig,
    diagnostics: Arc<dyn Diagnostics>,
}

impl GenerationClient<HttpJobTransport> {
    /// Creates a client that talks HTTP to the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be built.
    pub fn from_config(config: GenerationConfig) -> Result<Self, GenerationError> {
        let transport = HttpJobTransport::new(config.clone())?;
        Ok(Self::new(transport, config))
    }
}

impl<T: JobTransport> GenerationClient<T> {
    /// Creates a client over the given transport.
    pub fn new(transport: T, config: GenerationConfig) -> Self {
        Self {
            transport,
            config,
            diagnostics: Arc::new(NoopDiagnostics),
        }
    }

    /// Sets the diagnostics collaborator that receives image requests.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Submits a prompt and returns the job id issued by the remote service.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Transport`] on network or HTTP failures and
    /// [`GenerationError::Protocol`] if the response carries no job id.
    #[instrument(skip_all, fields(image = prompt.has_image()))]
    pub async fn submit(&self, prompt: &Prompt) -> Result<JobId, GenerationError> {
        let request = ChatRequest::from_prompt(prompt, &self.config);

        if request.has_image() {
            if let Err(e) = self.diagnostics.record_image_request(&request).await {
                warn!(error = %e, "failed to record image request diagnostics");
            }
        }

        let body = self.transport.submit(&request).await?;
        let job_id = parse_job_id(&body)?;

        info!(job_id = %job_id, "generation job submitted");
        Ok(job_id)
    }

    /// Polls a job until it reaches a terminal status or the attempt budget
    /// is exhausted.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Transport`] if a status request fails (not retried)
    /// - [`GenerationError::Protocol`] if a status body is not JSON
    /// - [`GenerationError::Failure`] if the job is reported failed
    /// - [`GenerationError::Timeout`] if no terminal status arrived in time
    #[instrument(skip_all, fields(job_id = %job_id))]
    pub async fn poll(&self, job_id: &JobId) -> Result<String, GenerationError> {
        let mut job = Job::submitted(job_id.clone());
        let interval = self.config.poll_interval();

        for _ in 0..self.config.max_attempts {
            tokio::time::sleep(interval).await;
            job.record_attempt();

            let body = self.transport.status(job.id()).await?;
            let status = JobStatus::from_body(&body);
            if status.is_pending() {
                debug!(attempt = job.attempts(), %status, "generation job pending");
                continue;
            }

            job.observe(&status);
            return match job.state() {
                JobState::Succeeded => {
                    info!(attempts = job.attempts(), "generation job succeeded");
                    Ok(extract_text(&body, &ExtractionStrategy::DEFAULT_ORDER))
                }
                state => {
                    warn!(attempts = job.attempts(), ?state, "generation job failed upstream");
                    Err(GenerationError::Failure {
                        reason: FAILED_REASON.to_string(),
                    })
                }
            };
        }

        job.time_out();
        warn!(attempts = job.attempts(), state = ?job.state(), "generation job timed out");
        Err(GenerationError::Timeout {
            attempts: job.attempts(),
        })
    }
}

#[async_trait]
impl<T: JobTransport> Generator for GenerationClient<T> {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let job_id = self.submit(prompt).await?;
        self.poll(&job_id).await
    }
}

/// Reads the job id from a submit response.
fn parse_job_id(body: &JsonValue) -> Result<JobId, GenerationError> {
    let raw = match body.get(REQUEST_ID_FIELD) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        _ => return Err(GenerationError::protocol("missing request id")),
    };
    JobId::new(raw).map_err(|_| GenerationError::protocol("missing request id"))
}
