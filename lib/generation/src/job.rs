//! Generation job lifecycle.
//!
//! A job is created by a submit call and lives for one request/poll cycle:
//! `submitted -> polling -> {succeeded | failed | timed_out}`.

use genrelay_core::JobId;
use serde_json::Value as JsonValue;
use std::fmt;

/// Status reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Job accepted, not started.
    Starting,
    /// Job running.
    Processing,
    /// Job finished with a result.
    Success,
    /// Job failed upstream.
    Failed,
    /// Any other value, or no status at all.
    Unrecognized(Option<String>),
}

impl JobStatus {
    /// Reads the `status` field of a status body.
    #[must_use]
    pub fn from_body(body: &JsonValue) -> Self {
        match body.get("status").and_then(JsonValue::as_str) {
            Some("starting") => Self::Starting,
            Some("processing") => Self::Processing,
            Some("success") => Self::Success,
            Some("failed") => Self::Failed,
            other => Self::Unrecognized(other.map(str::to_string)),
        }
    }

    /// Returns true if polling should continue.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !matches!(self, Self::Success | Self::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starting => write!(f, "starting"),
            Self::Processing => write!(f, "processing"),
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
            Self::Unrecognized(Some(s)) => write!(f, "unrecognized({s})"),
            Self::Unrecognized(None) => write!(f, "missing"),
        }
    }
}

/// The state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Accepted by the remote service, not yet polled.
    Submitted,
    /// At least one status request made.
    Polling,
    /// Finished with text.
    Succeeded,
    /// Reported failed upstream.
    Failed,
    /// Poll budget exhausted.
    TimedOut,
}

impl JobState {
    /// Returns true if the job has finished.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::TimedOut)
    }
}

/// A job owned by the call that submitted it.
#[derive(Debug, Clone)]
pub struct Job {
    id: JobId,
    state: JobState,
    attempts: u32,
}

impl Job {
    /// Creates a job in the submitted state.
    #[must_use]
    pub fn submitted(id: JobId) -> Self {
        Self {
            id,
            state: JobState::Submitted,
            attempts: 0,
        }
    }

    /// Returns the remote job identifier.
    #[must_use]
    pub fn id(&self) -> &JobId {
        &self.id
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> JobState {
        self.state
    }

    /// Returns the number of status requests made.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Records a status request. Ignored once terminal.
    pub fn record_attempt(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.attempts += 1;
        self.state = JobState::Polling;
    }

    /// Applies a polled status, moving to a terminal state when it is one.
    pub fn observe(&mut self, status: &JobStatus) {
        if self.state.is_terminal() {
            return;
        }
        match status {
            JobStatus::Success => self.state = JobState::Succeeded,
            JobStatus::Failed => self.state = JobState::Failed,
            _ => {}
        }
    }

    /// Marks the job as timed out unless it already finished.
    pub fn time_out(&mut self) {
        if !self.state.is_terminal() {
            self.state = JobState::TimedOut;
        }
    }
}
