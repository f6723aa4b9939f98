//! Telegram Bot API client.
//!
//! A thin JSON-over-HTTPS client for the handful of methods the relay uses.
//! Every response is unwrapped from the `{ok, result, description}` envelope;
//! `ok: false` becomes [`TelegramError::Api`].

use crate::config::TelegramConfig;
use crate::error::TelegramError;
use crate::platform::ChatPlatform;
use crate::types::{ApiResponse, File, OutgoingMessage, PhotoSize, Update, User};
use async_trait::async_trait;
use rootcause::prelude::Report;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument};

/// Timeout for every call except the long poll.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Extra time allowed on top of the long-poll timeout.
const LONG_POLL_GRACE: Duration = Duration::from_secs(10);

/// Telegram Bot API client.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: TelegramConfig) -> Result<Self, Report<TelegramError>> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TelegramError::Request {
                method: "client".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { http, config })
    }

    async fn call<P, R>(
        &self,
        method: &str,
        params: &P,
        timeout: Duration,
    ) -> Result<R, Report<TelegramError>>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.config.method_url(method))
            .timeout(timeout)
            .json(params)
            .send()
            .await
            .map_err(|e| TelegramError::Request {
                method: method.to_string(),
                reason: e.without_url().to_string(),
            })?;

        // Error responses carry the same envelope, so the status is not checked.
        let envelope: ApiResponse<R> =
            response
                .json()
                .await
                .map_err(|e| TelegramError::InvalidResponse {
                    method: method.to_string(),
                    reason: e.without_url().to_string(),
                })?;

        unwrap_envelope(method, envelope)
    }

    /// Returns the bot's own account.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or Telegram is unreachable.
    pub async fn get_me(&self) -> Result<User, Report<TelegramError>> {
        self.call("getMe", &json!({}), REQUEST_TIMEOUT).await
    }

    /// Long-polls for updates with ids at or above `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Telegram rejects it.
    #[instrument(skip(self), level = "trace")]
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, Report<TelegramError>> {
        let params = json!({
            "offset": offset,
            "timeout": self.config.poll_timeout_secs,
            "allowed_updates": ["message", "callback_query"],
        });
        self.call(
            "getUpdates",
            &params,
            self.config.poll_timeout() + LONG_POLL_GRACE,
        )
        .await
    }

    async fn get_file(&self, file_id: &str) -> Result<File, Report<TelegramError>> {
        self.call("getFile", &json!({ "file_id": file_id }), REQUEST_TIMEOUT)
            .await
    }

    async fn download(&self, file_id: &str, file_path: &str) -> Result<Vec<u8>, Report<TelegramError>> {
        let download_error = |reason: String| TelegramError::Download {
            file_id: file_id.to_string(),
            reason,
        };

        let response = self
            .http
            .get(self.config.file_url(file_path))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| download_error(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(download_error(format!("HTTP {}", status.as_u16())).into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| download_error(e.without_url().to_string()))?;
        Ok(bytes.to_vec())
    }
}

fn unwrap_envelope<R>(method: &str, envelope: ApiResponse<R>) -> Result<R, Report<TelegramError>> {
    if !envelope.ok {
        return Err(TelegramError::Api {
            method: method.to_string(),
            code: envelope.error_code,
            description: envelope
                .description
                .unwrap_or_else(|| "no description".to_string()),
        }
        .into());
    }

    match envelope.result {
        Some(result) => Ok(result),
        None => Err(TelegramError::InvalidResponse {
            method: method.to_string(),
            reason: "missing result".to_string(),
        }
        .into()),
    }
}

#[async_trait]
impl ChatPlatform for TelegramClient {
    #[instrument(skip_all, fields(chat_id = message.chat_id, len = message.text.chars().count()))]
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), Report<TelegramError>> {
        let _sent: serde_json::Value = self.call("sendMessage", &message, REQUEST_TIMEOUT).await?;
        Ok(())
    }

    async fn send_typing(&self, chat_id: i64) -> Result<(), Report<TelegramError>> {
        let params = json!({ "chat_id": chat_id, "action": "typing" });
        let _: bool = self.call("sendChatAction", &params, REQUEST_TIMEOUT).await?;
        Ok(())
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> Result<(), Report<TelegramError>> {
        let mut params = json!({ "callback_query_id": callback_id });
        if let Some(text) = text {
            params["text"] = json!(text);
        }
        let _: bool = self
            .call("answerCallbackQuery", &params, REQUEST_TIMEOUT)
            .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(file_id = %photo.file_id, width = photo.width, height = photo.height))]
    async fn download_photo(&self, photo: &PhotoSize) -> Result<Vec<u8>, Report<TelegramError>> {
        let file = self.get_file(&photo.file_id).await?;
        let Some(file_path) = file.file_path else {
            return Err(TelegramError::Download {
                file_id: file.file_id,
                reason: "file has no download path".to_string(),
            }
            .into());
        };

        let bytes = self.download(&photo.file_id, &file_path).await?;
        debug!(bytes = bytes.len(), "downloaded photo");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;

    fn envelope(value: JsonValue) -> ApiResponse<JsonValue> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn ok_envelope_yields_result() {
        let result = unwrap_envelope("getMe", envelope(json!({"ok": true, "result": {"id": 1}})));
        assert_eq!(result.unwrap(), json!({"id": 1}));
    }

    #[test]
    fn failed_envelope_is_api_error() {
        let err = unwrap_envelope(
            "sendMessage",
            envelope(json!({
                "ok": false,
                "error_code": 403,
                "description": "Forbidden: bot was blocked by the user"
            })),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("blocked"));
    }

    #[test]
    fn envelope_without_result_is_invalid() {
        let err = unwrap_envelope("getFile", envelope(json!({"ok": true}))).unwrap_err();
        assert!(err.to_string().contains("missing result"));
    }
}
