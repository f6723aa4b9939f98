//! Error types for the generation crate.
//!
//! - `GenerationError`: the outcome of a submit/poll cycle that did not
//!   produce text
//! - `PromptError`: a prompt that violates its invariants
//! - `DiagnosticsError`: failures of the optional debug artifact writer

use std::fmt;

/// Errors from a generation job.
///
/// Every failure mode of the remote protocol is one of these variants;
/// callers turn them into replies with [`GenerationError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Network failure or non-2xx HTTP status.
    Transport {
        /// HTTP status code, if a response was received.
        status: Option<u16>,
        /// Underlying cause.
        reason: String,
    },
    /// The remote service answered with an unexpected shape.
    Protocol { reason: String },
    /// The remote service reported the job as failed.
    Failure { reason: String },
    /// The poll budget was exhausted without a terminal status.
    Timeout { attempts: u32 },
}

impl GenerationError {
    /// Creates a transport error without an HTTP status.
    #[must_use]
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            reason: reason.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(reason: impl Into<String>) -> Self {
        Self::Protocol {
            reason: reason.into(),
        }
    }

    /// Returns the text shown to the end user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { status, reason } => match status {
                Some(code) => {
                    format!("Could not reach the generation service: HTTP {code} ({reason})")
                }
                None => format!("Could not reach the generation service: {reason}"),
            },
            Self::Protocol { reason } | Self::Failure { reason } => {
                format!("Processing error: {reason}")
            }
            Self::Timeout { .. } => "The response timed out, please try again.".to_string(),
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport {
                status: Some(code),
                reason,
            } => write!(f, "transport error (HTTP {code}): {reason}"),
            Self::Transport {
                status: None,
                reason,
            } => write!(f, "transport error: {reason}"),
            Self::Protocol { reason } => write!(f, "protocol error: {reason}"),
            Self::Failure { reason } => write!(f, "generation failed: {reason}"),
            Self::Timeout { attempts } => {
                write!(f, "no result after {attempts} poll attempts")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Errors from prompt construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Prompt text is empty.
    EmptyText,
    /// Image payload is empty.
    EmptyImage,
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "prompt text is empty"),
            Self::EmptyImage => write!(f, "image payload is empty"),
        }
    }
}

impl std::error::Error for PromptError {}

/// Errors from the diagnostics collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticsError {
    /// The artifact could not be serialized.
    Serialize { reason: String },
    /// The artifact could not be written.
    Write { path: String, reason: String },
}

impl fmt::Display for DiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize { reason } => {
                write!(f, "failed to serialize debug artifact: {reason}")
            }
            Self::Write { path, reason } => {
                write!(f, "failed to write debug artifact '{path}': {reason}")
            }
        }
    }
}

impl std::error::Error for DiagnosticsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = GenerationError::Transport {
            status: Some(502),
            reason: "bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn user_messages_cover_every_variant() {
        assert!(
            GenerationError::Timeout { attempts: 15 }
                .user_message()
                .contains("timed out")
        );
        assert_eq!(
            GenerationError::Failure {
                reason: "request not completed".to_string()
            }
            .user_message(),
            "Processing error: request not completed"
        );
        assert_eq!(
            GenerationError::protocol("missing request id").user_message(),
            "Processing error: missing request id"
        );
        assert!(
            GenerationError::transport("connection refused")
                .user_message()
                .contains("connection refused")
        );
    }

    #[test]
    fn prompt_error_display() {
        assert_eq!(PromptError::EmptyImage.to_string(), "image payload is empty");
    }
}
