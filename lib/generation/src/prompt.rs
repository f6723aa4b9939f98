//! Prompts accepted by the generation client.

use crate::error::PromptError;

/// Caption used for image prompts when the user supplied none.
pub const DEFAULT_IMAGE_CAPTION: &str = "What is in this image?";

/// A prompt: plain text, or a caption paired with one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Text-only prompt.
    Text(String),
    /// Image with its caption. Both are non-empty.
    Image { caption: String, image: Vec<u8> },
}

impl Prompt {
    /// Creates a text prompt.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::EmptyText`] if the text is blank.
    pub fn text(text: impl Into<String>) -> Result<Self, PromptError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(PromptError::EmptyText);
        }
        Ok(Self::Text(text))
    }

    /// Creates an image prompt, falling back to [`DEFAULT_IMAGE_CAPTION`]
    /// when the caption is missing or blank.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::EmptyImage`] if the payload is empty.
    pub fn image(image: Vec<u8>, caption: Option<String>) -> Result<Self, PromptError> {
        if image.is_empty() {
            return Err(PromptError::EmptyImage);
        }
        let caption = caption
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_CAPTION.to_string());
        Ok(Self::Image { caption, image })
    }

    /// Returns the prompt text (the caption for image prompts).
    #[must_use]
    pub fn text_part(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Image { caption, .. } => caption,
        }
    }

    /// Returns true if the prompt carries an image.
    #[must_use]
    pub fn has_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}
