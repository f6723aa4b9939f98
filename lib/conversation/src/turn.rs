//! Conversation turns.

use chrono::{DateTime, Utc};
use genrelay_core::TurnId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The end user.
    User,
    /// The generation service.
    Assistant,
}

impl Speaker {
    /// Returns the label used in transcripts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn identifier.
    pub id: TurnId,
    /// Who said it.
    pub speaker: Speaker,
    /// What was said.
    pub text: String,
    /// When the turn was created.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Creates a new turn.
    #[must_use]
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates a user turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    /// Creates an assistant turn.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }

    /// Renders the turn as a transcript line, e.g. `User: hello`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}: {}", self.speaker, self.text)
    }
}

/// Renders turns as a newline-separated transcript, oldest first.
#[must_use]
pub fn render_transcript<'a>(turns: impl IntoIterator<Item = &'a Turn>) -> String {
    turns
        .into_iter()
        .map(Turn::render)
        .collect::<Vec<_>>()
        .join("\n")
}
