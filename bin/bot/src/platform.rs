//! The chat platform seam used by the relay.

use crate::error::TelegramError;
use crate::types::{OutgoingMessage, PhotoSize};
use async_trait::async_trait;
use rootcause::prelude::Report;

/// Outbound operations the relay needs from a chat platform.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Sends a message.
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), Report<TelegramError>>;

    /// Shows the "typing" indicator in a chat.
    async fn send_typing(&self, chat_id: i64) -> Result<(), Report<TelegramError>>;

    /// Acknowledges an inline keyboard press, optionally with a toast.
    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> Result<(), Report<TelegramError>>;

    /// Downloads the raw bytes of a photo.
    async fn download_photo(&self, photo: &PhotoSize) -> Result<Vec<u8>, Report<TelegramError>>;
}
