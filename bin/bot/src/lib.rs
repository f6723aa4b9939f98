//! genrelay Telegram bot.
//!
//! This crate wires the Telegram Bot API to the generation client:
//!
//! - **Telegram**: Bot API client and wire types
//! - **Relay**: command, text, photo, and mode handling per update
//! - **Poller**: long-polling loop dispatching updates to the relay

pub mod command;
pub mod config;
pub mod error;
pub mod platform;
pub mod poller;
pub mod relay;
pub mod reply;
pub mod telegram;
pub mod types;

pub use config::{RelayConfig, TelegramConfig};
pub use error::{BotError, TelegramError};
pub use platform::ChatPlatform;
pub use relay::Relay;
pub use telegram::TelegramClient;
