//! Per-user image handling mode.
//!
//! In `auto` mode images are sent to the generation service as they are.
//! In `text` mode the user describes the image instead, and the description
//! goes through the text-only path. A user in `text` mode who sent a photo
//! without a caption is awaiting a description until their next message.

use genrelay_core::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// How images from a user are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    /// Send the image itself.
    #[default]
    Auto,
    /// Send a user-supplied description of the image.
    Text,
}

impl ImageMode {
    /// All modes, in display order.
    pub const ALL: [Self; 2] = [Self::Auto, Self::Text];

    /// Returns the mode name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ImageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError {
    /// The rejected value.
    pub value: String,
}

impl fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown image mode: {}", self.value)
    }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for ImageMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "text" => Ok(Self::Text),
            _ => Err(UnknownModeError {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct UserPreferences {
    mode: ImageMode,
    awaiting_description: bool,
}

/// In-memory per-user mode settings.
#[derive(Debug, Default)]
pub struct ModeStore {
    users: RwLock<HashMap<UserId, UserPreferences>>,
}

impl ModeStore {
    /// Creates an empty store; every user starts in [`ImageMode::Auto`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a user's mode.
    #[must_use]
    pub fn mode(&self, user_id: UserId) -> ImageMode {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(&user_id).map(|p| p.mode).unwrap_or_default()
    }

    /// Sets a user's mode. Any pending description request is dropped.
    pub fn set_mode(&self, user_id: UserId, mode: ImageMode) {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        let prefs = users.entry(user_id).or_default();
        prefs.mode = mode;
        prefs.awaiting_description = false;
    }

    /// Marks the user as owing a description for a photo.
    pub fn await_description(&self, user_id: UserId) {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.entry(user_id).or_default().awaiting_description = true;
    }

    /// Returns whether a description was pending, clearing the flag.
    pub fn take_awaiting_description(&self, user_id: UserId) -> bool {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users
            .get_mut(&user_id)
            .map(|p| std::mem::take(&mut p.awaiting_description))
            .unwrap_or(false)
    }
}
