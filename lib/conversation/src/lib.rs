//! Conversation state for genrelay.
//!
//! This crate provides:
//!
//! - **Turns**: speaker-tagged messages and transcript rendering
//! - **Conversation Store**: a sliding window of recent turns per user
//! - **Mode Store**: per-user choice of how images are handled

pub mod mode;
pub mod store;
pub mod turn;

pub use mode::{ImageMode, ModeStore, UnknownModeError};
pub use store::{ConversationStore, DEFAULT_HISTORY_LIMIT};
pub use turn::{Speaker, Turn, render_transcript};
