//! Optional diagnostics for image requests.
//!
//! The client hands every image request to a [`Diagnostics`] collaborator
//! before sending it. [`JsonFileDiagnostics`] keeps the last one as a JSON
//! debug artifact with the image data elided; [`NoopDiagnostics`] drops it.

use crate::error::DiagnosticsError;
use crate::request::ChatRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collaborator receiving image requests for inspection.
#[async_trait]
pub trait Diagnostics: Send + Sync {
    /// Records an image request about to be sent.
    async fn record_image_request(&self, request: &ChatRequest) -> Result<(), DiagnosticsError>;
}

/// Diagnostics that discard everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

#[async_trait]
impl Diagnostics for NoopDiagnostics {
    async fn record_image_request(&self, _request: &ChatRequest) -> Result<(), DiagnosticsError> {
        Ok(())
    }
}

/// Contents of the debug artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugArtifact {
    /// When the request was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The request with image payloads redacted.
    pub request: ChatRequest,
}

/// Writes the last image request to a JSON file, overwriting earlier ones.
#[derive(Debug, Clone)]
pub struct JsonFileDiagnostics {
    path: PathBuf,
}

impl JsonFileDiagnostics {
    /// Creates a writer for the given artifact path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the artifact path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl Diagnostics for JsonFileDiagnostics {
    async fn record_image_request(&self, request: &ChatRequest) -> Result<(), DiagnosticsError> {
        let artifact = DebugArtifact {
            recorded_at: Utc::now(),
            request: request.redacted(),
        };
        let bytes =
            serde_json::to_vec_pretty(&artifact).map_err(|e| DiagnosticsError::Serialize {
                reason: e.to_string(),
            })?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| DiagnosticsError::Write {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(path = %self.path.display(), "wrote image request debug artifact");
        Ok(())
    }
}
