//! Domain error types for the bot binary.
//!
//! Telegram failures travel as `Report<TelegramError>`; startup failures as
//! `Report<BotError>`.

use std::fmt;

/// Errors talking to the Telegram Bot API.
#[derive(Debug)]
pub enum TelegramError {
    /// The HTTP request could not be completed.
    Request { method: String, reason: String },
    /// Telegram answered with `ok: false`.
    Api {
        method: String,
        code: Option<i32>,
        description: String,
    },
    /// The response body was not the expected shape.
    InvalidResponse { method: String, reason: String },
    /// A file could not be downloaded.
    Download { file_id: String, reason: String },
}

impl fmt::Display for TelegramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { method, reason } => {
                write!(f, "telegram {method} request failed: {reason}")
            }
            Self::Api {
                method,
                code: Some(code),
                description,
            } => write!(f, "telegram {method} returned error {code}: {description}"),
            Self::Api {
                method,
                code: None,
                description,
            } => write!(f, "telegram {method} returned error: {description}"),
            Self::InvalidResponse { method, reason } => {
                write!(f, "invalid telegram {method} response: {reason}")
            }
            Self::Download { file_id, reason } => {
                write!(f, "failed to download file '{file_id}': {reason}")
            }
        }
    }
}

impl std::error::Error for TelegramError {}

/// Errors that stop the bot from starting.
#[derive(Debug)]
pub enum BotError {
    /// Configuration is missing or invalid.
    Config { reason: String },
    /// A service client could not be created.
    Startup { component: String, reason: String },
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { reason } => write!(f, "invalid configuration: {reason}"),
            Self::Startup { component, reason } => {
                write!(f, "failed to start {component}: {reason}")
            }
        }
    }
}

impl std::error::Error for BotError {}
