//! Core domain types and utilities for genrelay.
//!
//! This crate provides the foundational types and error handling shared by
//! the generation client, the conversation store and the chat bot.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ExchangeId, JobId, ParseIdError, TurnId, UserId};
