//! Telegram Bot API wire types.
//!
//! Only the fields the relay reads are modelled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every Bot API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i32>,
}

/// An incoming update from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
    pub caption: Option<String>,
    pub photo: Option<Vec<PhotoSize>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// One resolution of a photo. Telegram sends several per photo message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
    pub file_size: Option<u64>,
}

impl PhotoSize {
    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Picks the highest-resolution photo; ties go to the larger file.
#[must_use]
pub fn largest_photo(photos: &[PhotoSize]) -> Option<&PhotoSize> {
    photos
        .iter()
        .max_by_key(|p| (p.area(), p.file_size.unwrap_or(0)))
}

/// A press on an inline keyboard button.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    pub message: Option<Message>,
    pub data: Option<String>,
}

/// Result of `getFile`.
#[derive(Debug, Clone, Deserialize)]
pub struct File {
    pub file_id: String,
    pub file_path: Option<String>,
}

/// Body of `sendMessage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl OutgoingMessage {
    /// Creates a plain message to a chat.
    #[must_use]
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    /// Sends the message as a reply to another message.
    #[must_use]
    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }

    /// Attaches an inline keyboard.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(keyboard);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn photo(id: &str, width: u32, height: u32, size: Option<u64>) -> PhotoSize {
        PhotoSize {
            file_id: id.to_string(),
            width,
            height,
            file_size: size,
        }
    }

    #[test]
    fn largest_photo_by_area() {
        let photos = [
            photo("small", 90, 90, Some(1_000)),
            photo("large", 1280, 960, Some(90_000)),
            photo("medium", 320, 240, Some(9_000)),
        ];
        assert_eq!(largest_photo(&photos).unwrap().file_id, "large");
    }

    #[test]
    fn largest_photo_ties_broken_by_file_size() {
        let photos = [
            photo("a", 800, 600, Some(50_000)),
            photo("b", 600, 800, Some(70_000)),
            photo("c", 800, 600, None),
        ];
        assert_eq!(largest_photo(&photos).unwrap().file_id, "b");
        assert!(largest_photo(&[]).is_none());
    }

    #[test]
    fn update_deserializes_photo_message() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 10,
            "message": {
                "message_id": 5,
                "from": {"id": 42, "is_bot": false, "first_name": "Ann"},
                "chat": {"id": 42, "type": "private"},
                "date": 1700000000,
                "caption": "what is this?",
                "photo": [
                    {"file_id": "f1", "file_unique_id": "u1", "width": 90, "height": 60},
                    {"file_id": "f2", "file_unique_id": "u2", "width": 900, "height": 600, "file_size": 1234}
                ]
            }
        }))
        .unwrap();

        let message = update.message.unwrap();
        assert_eq!(message.from.unwrap().id, 42);
        assert_eq!(message.caption.as_deref(), Some("what is this?"));
        assert_eq!(message.photo.unwrap().len(), 2);
    }

    #[test]
    fn outgoing_message_omits_unset_fields() {
        let body = serde_json::to_value(OutgoingMessage::new(1, "hi")).unwrap();
        assert_eq!(body, json!({"chat_id": 1, "text": "hi"}));

        let keyboard = InlineKeyboardMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: "Auto".to_string(),
                callback_data: "mode:auto".to_string(),
            }]],
        };
        let body =
            serde_json::to_value(OutgoingMessage::new(1, "pick").reply_to(9).with_keyboard(keyboard))
                .unwrap();
        assert_eq!(body["reply_to_message_id"], 9);
        assert_eq!(
            body["reply_markup"]["inline_keyboard"][0][0]["callback_data"],
            "mode:auto"
        );
    }
}
