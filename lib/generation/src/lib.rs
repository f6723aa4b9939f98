//! Generation client for genrelay.
//!
//! This crate implements the asynchronous request/poll protocol used to
//! obtain text from the remote generation API:
//!
//! - **Prompt**: text, or a caption paired with one image
//! - **Submit**: posts the request body and obtains a job id
//! - **Poll**: bounded, fixed-interval status polling with a typed outcome
//! - **Extraction**: ordered strategies tolerant of several success shapes
//! - **Diagnostics**: optional debug artifact for image requests

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod job;
pub mod prompt;
pub mod request;
pub mod transport;

pub use client::{GenerationClient, Generator};
pub use config::GenerationConfig;
pub use diagnostics::{DebugArtifact, Diagnostics, JsonFileDiagnostics, NoopDiagnostics};
pub use error::{DiagnosticsError, GenerationError, PromptError};
pub use extract::{ExtractionStrategy, extract_text};
pub use job::{Job, JobState, JobStatus};
pub use prompt::{DEFAULT_IMAGE_CAPTION, Prompt};
pub use request::ChatRequest;
pub use transport::{HttpJobTransport, JobTransport};
