//! Request bodies for the submit endpoint.
//!
//! Text prompts are sent as a single user message with sampling parameters.
//! Image prompts are sent as a multi-part message whose image part embeds
//! the payload as a base64 JPEG data URI.

use crate::config::GenerationConfig;
use crate::prompt::Prompt;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

/// Data URI prefix for image payloads.
const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Body of a submit request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier (image requests only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// The conversation sent to the model.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature (text requests only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate (text requests only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Builds the request body for a prompt.
    #[must_use]
    pub fn from_prompt(prompt: &Prompt, config: &GenerationConfig) -> Self {
        match prompt {
            Prompt::Text(text) => Self {
                model: None,
                messages: vec![ChatMessage::user(MessageContent::Text(text.clone()))],
                temperature: Some(config.temperature),
                max_tokens: Some(config.max_tokens),
            },
            Prompt::Image { caption, image } => Self {
                model: Some(config.model.clone()),
                messages: vec![ChatMessage::user(MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: caption.clone(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: jpeg_data_uri(image),
                        },
                    },
                ]))],
                temperature: None,
                max_tokens: None,
            },
        }
    }

    /// Returns true if any message carries an image part.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.messages.iter().any(|m| match &m.content {
            MessageContent::Parts(parts) => parts
                .iter()
                .any(|p| matches!(p, ContentPart::ImageUrl { .. })),
            MessageContent::Text(_) => false,
        })
    }

    /// Returns a copy with every embedded image payload replaced by a
    /// size marker.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for message in &mut copy.messages {
            if let MessageContent::Parts(parts) = &mut message.content {
                for part in parts.iter_mut() {
                    if let ContentPart::ImageUrl { image_url } = part {
                        image_url.url = redact_data_uri(&image_url.url);
                    }
                }
            }
        }
        copy
    }
}

/// A message in the submit body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender.
    pub role: ChatRole,
    /// The message content.
    pub content: MessageContent,
}

impl ChatMessage {
    /// Creates a user message.
    #[must_use]
    pub fn user(content: MessageContent) -> Self {
        Self {
            role: ChatRole::User,
            content,
        }
    }
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// User/human message.
    User,
}

/// Message content: a plain string or a list of typed parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text.
    Text(String),
    /// Multi-part content.
    Parts(Vec<ContentPart>),
}

/// One part of a multi-part message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text part.
    Text { text: String },
    /// Image part referenced by URL (here always a data URI).
    ImageUrl { image_url: ImageUrl },
}

/// Image reference inside an image part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// The image URL.
    pub url: String,
}

/// Encodes image bytes as a JPEG data URI.
#[must_use]
pub fn jpeg_data_uri(image: &[u8]) -> String {
    format!("{JPEG_DATA_URI_PREFIX}{}", BASE64_STANDARD.encode(image))
}

fn redact_data_uri(url: &str) -> String {
    match url.split_once(";base64,") {
        Some((head, data)) => format!("{head};base64,<omitted {} bytes>", data.len()),
        None => url.to_string(),
    }
}
