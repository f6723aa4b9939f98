//! Extraction of generated text from a successful status body.
//!
//! The upstream API is observed to vary its success envelope, so the text is
//! recovered by an ordered list of strategies. Each strategy is a total
//! function from the parsed body to `Option<String>`; the first one that
//! yields text wins. When none does, the serialized body is returned so a
//! successful job never produces an empty result.

use serde_json::Value as JsonValue;

/// One way of locating the generated text in a status body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// First element of a non-empty `result` list.
    ResultList,
    /// `message.content` of the first element of `full_response`.
    FullResponseMessage,
    /// Non-empty `output` field.
    Output,
}

impl ExtractionStrategy {
    /// Strategies in the order they are tried.
    pub const DEFAULT_ORDER: [Self; 3] = [Self::ResultList, Self::FullResponseMessage, Self::Output];

    /// Applies this strategy to a status body.
    #[must_use]
    pub fn apply(self, body: &JsonValue) -> Option<String> {
        match self {
            Self::ResultList => body
                .get("result")
                .and_then(JsonValue::as_array)
                .and_then(|items| items.first())
                .and_then(usable_text),
            Self::FullResponseMessage => body
                .get("full_response")
                .and_then(JsonValue::as_array)
                .and_then(|items| items.first())
                .and_then(|first| first.get("message"))
                .and_then(|message| message.get("content"))
                .and_then(usable_text),
            Self::Output => body.get("output").and_then(usable_text),
        }
    }

    /// Returns a short name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ResultList => "result",
            Self::FullResponseMessage => "full_response",
            Self::Output => "output",
        }
    }
}

/// Runs the strategies in order and falls back to the serialized body.
#[must_use]
pub fn extract_text(body: &JsonValue, strategies: &[ExtractionStrategy]) -> String {
    for strategy in strategies {
        if let Some(text) = strategy.apply(body) {
            tracing::debug!(strategy = strategy.name(), "extracted generated text");
            return text;
        }
    }

    tracing::debug!("no extraction strategy matched, returning raw status body");
    body.to_string()
}

/// Converts a JSON value into reply text, treating empty values as absent.
fn usable_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null | JsonValue::Bool(false) => None,
        JsonValue::String(s) if s.trim().is_empty() => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Array(items) if items.is_empty() => None,
        JsonValue::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}
