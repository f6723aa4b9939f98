//! Message routing between Telegram and the generation service.
//!
//! The [`Relay`] turns each incoming update into at most one generation
//! request, replies to the user, and records successful exchanges in the
//! user's history. Failed generations are reported to the user and leave the
//! history untouched.

use crate::command::Command;
use crate::error::TelegramError;
use crate::platform::ChatPlatform;
use crate::reply::{MAX_MESSAGE_CHARS, split_message};
use crate::types::{
    CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, Message, OutgoingMessage,
    PhotoSize, Update, largest_photo,
};
use genrelay_conversation::{ConversationStore, ImageMode, ModeStore, Turn, render_transcript};
use genrelay_core::{ExchangeId, UserId};
use genrelay_generation::{DEFAULT_IMAGE_CAPTION, GenerationError, Generator, Prompt, PromptError};
use rootcause::prelude::Report;
use tracing::{debug, info, instrument, warn};

const HELP_TEXT: &str = "Hi! Send me a message or a photo and I'll answer.\n\
Commands:\n\
/start, /help - show this message\n\
/clear - clear the conversation history\n\
/mode - choose how photos are handled";

const HISTORY_CLEARED: &str = "History cleared!";
const DESCRIBE_IMAGE: &str = "Please describe the image in your next message.";
const DOWNLOAD_FAILED: &str = "Could not download the image, please try again.";
const MODE_CALLBACK_PREFIX: &str = "mode:";

/// Routes updates for all users.
pub struct Relay<P, G> {
    platform: P,
    generator: G,
    history: ConversationStore,
    modes: ModeStore,
}

/// Where a reply goes.
#[derive(Debug, Clone, Copy)]
struct ReplyTarget {
    chat_id: i64,
    message_id: i64,
}

impl From<&Message> for ReplyTarget {
    fn from(message: &Message) -> Self {
        Self {
            chat_id: message.chat.id,
            message_id: message.message_id,
        }
    }
}

impl<P: ChatPlatform, G: Generator> Relay<P, G> {
    /// Creates a relay with empty stores.
    pub fn new(platform: P, generator: G, history: ConversationStore) -> Self {
        Self {
            platform,
            generator,
            history,
            modes: ModeStore::new(),
        }
    }

    /// Returns the conversation store.
    pub fn history(&self) -> &ConversationStore {
        &self.history
    }

    /// Returns the mode store.
    pub fn modes(&self) -> &ModeStore {
        &self.modes
    }

    /// Handles one update.
    ///
    /// # Errors
    ///
    /// Returns an error if a reply could not be delivered.
    #[instrument(skip_all, fields(update_id = update.update_id, exchange = %ExchangeId::new()))]
    pub async fn handle_update(&self, update: Update) -> Result<(), Report<TelegramError>> {
        if let Some(query) = update.callback_query {
            return self.handle_callback(query).await;
        }

        let Some(message) = update.message else {
            debug!("ignoring update without a message");
            return Ok(());
        };
        let Some(sender) = message.from.as_ref() else {
            debug!("ignoring message without a sender");
            return Ok(());
        };
        if sender.is_bot {
            debug!(sender = sender.id, "ignoring message from a bot");
            return Ok(());
        }
        let user_id = UserId::new(sender.id);

        if let Some(photos) = message.photo.as_deref().filter(|p| !p.is_empty()) {
            return self.handle_photo(user_id, &message, photos).await;
        }

        let Some(text) = message.text.as_deref() else {
            debug!("ignoring message without text or photo");
            return Ok(());
        };

        match Command::parse(text) {
            Some(command) => self.handle_command(user_id, &message, command).await,
            None => self.handle_text(user_id, &message, text).await,
        }
    }

    async fn handle_command(
        &self,
        user_id: UserId,
        message: &Message,
        command: Command,
    ) -> Result<(), Report<TelegramError>> {
        info!(user = %user_id, ?command, "command");
        let target = ReplyTarget::from(message);

        match command {
            Command::Start | Command::Help => self.reply(target, HELP_TEXT).await,
            Command::Clear => {
                self.history.clear(user_id);
                self.modes.take_awaiting_description(user_id);
                self.reply(target, HISTORY_CLEARED).await
            }
            Command::Mode => {
                let current = self.modes.mode(user_id);
                let reply = OutgoingMessage::new(
                    target.chat_id,
                    format!("Current image mode: {current}. Choose how photos are handled:"),
                )
                .reply_to(target.message_id)
                .with_keyboard(mode_keyboard());
                self.platform.send_message(reply).await
            }
        }
    }

    async fn handle_text(
        &self,
        user_id: UserId,
        message: &Message,
        text: &str,
    ) -> Result<(), Report<TelegramError>> {
        let target = ReplyTarget::from(message);

        if self.modes.take_awaiting_description(user_id) {
            debug!(user = %user_id, "text received as image description");
            return self
                .converse(user_id, target, image_description(text))
                .await;
        }

        self.converse(user_id, target, text.to_string()).await
    }

    async fn handle_photo(
        &self,
        user_id: UserId,
        message: &Message,
        photos: &[PhotoSize],
    ) -> Result<(), Report<TelegramError>> {
        let target = ReplyTarget::from(message);
        let caption = message
            .caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        match self.modes.mode(user_id) {
            ImageMode::Text => match caption {
                Some(caption) => {
                    self.converse(user_id, target, image_description(caption))
                        .await
                }
                None => {
                    self.modes.await_description(user_id);
                    self.reply(target, DESCRIBE_IMAGE).await
                }
            },
            ImageMode::Auto => {
                let Some(photo) = largest_photo(photos) else {
                    return Ok(());
                };
                self.send_typing(target).await;

                let image = match self.platform.download_photo(photo).await {
                    Ok(image) => image,
                    Err(report) => {
                        warn!(user = %user_id, error = %report, "photo download failed");
                        return self.reply(target, DOWNLOAD_FAILED).await;
                    }
                };

                let caption = caption.unwrap_or(DEFAULT_IMAGE_CAPTION);
                let user_turn = Turn::user(format!("[Image] {caption}"));
                let context = render_transcript(&self.history.get(user_id));
                let prompt_caption = if context.is_empty() {
                    caption.to_string()
                } else {
                    format!("{context}\n{caption}")
                };

                let prompt = Prompt::image(image, Some(prompt_caption));
                self.complete(user_id, target, user_turn, prompt).await
            }
        }
    }

    /// Sends the user's text with their history as a text prompt.
    async fn converse(
        &self,
        user_id: UserId,
        target: ReplyTarget,
        text: String,
    ) -> Result<(), Report<TelegramError>> {
        self.send_typing(target).await;

        let user_turn = Turn::user(text);
        let history = self.history.get(user_id);
        let transcript = render_transcript(history.iter().chain([&user_turn]));

        let prompt = Prompt::text(transcript);
        self.complete(user_id, target, user_turn, prompt).await
    }

    async fn complete(
        &self,
        user_id: UserId,
        target: ReplyTarget,
        user_turn: Turn,
        prompt: Result<Prompt, PromptError>,
    ) -> Result<(), Report<TelegramError>> {
        let prompt = match prompt {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(user = %user_id, error = %e, "invalid prompt");
                return self.reply(target, &format!("Processing error: {e}")).await;
            }
        };

        match self.generator.generate(&prompt).await {
            Ok(answer) => {
                info!(user = %user_id, chars = answer.chars().count(), "generation succeeded");
                self.history
                    .record_exchange(user_id, user_turn, Turn::assistant(answer.clone()));
                self.reply(target, &answer).await
            }
            Err(e) => {
                log_generation_failure(user_id, &e);
                self.reply(target, &e.user_message()).await
            }
        }
    }

    async fn handle_callback(&self, query: CallbackQuery) -> Result<(), Report<TelegramError>> {
        let user_id = UserId::new(query.from.id);
        let mode = query
            .data
            .as_deref()
            .and_then(|data| data.strip_prefix(MODE_CALLBACK_PREFIX))
            .and_then(|name| name.parse::<ImageMode>().ok());

        let Some(mode) = mode else {
            debug!(user = %user_id, data = ?query.data, "unknown callback");
            return self
                .platform
                .answer_callback(&query.id, Some("Unknown option"))
                .await;
        };

        self.modes.set_mode(user_id, mode);
        info!(user = %user_id, %mode, "image mode changed");

        let confirmation = format!("Image mode set to: {mode}");
        self.platform
            .answer_callback(&query.id, Some(&confirmation))
            .await?;

        if let Some(message) = &query.message {
            self.platform
                .send_message(OutgoingMessage::new(message.chat.id, confirmation))
                .await?;
        }
        Ok(())
    }

    async fn send_typing(&self, target: ReplyTarget) {
        if let Err(report) = self.platform.send_typing(target.chat_id).await {
            debug!(error = %report, "typing indicator failed");
        }
    }

    async fn reply(&self, target: ReplyTarget, text: &str) -> Result<(), Report<TelegramError>> {
        for (i, chunk) in split_message(text, MAX_MESSAGE_CHARS).into_iter().enumerate() {
            let mut message = OutgoingMessage::new(target.chat_id, chunk);
            if i == 0 {
                message = message.reply_to(target.message_id);
            }
            self.platform.send_message(message).await?;
        }
        Ok(())
    }
}

fn image_description(text: &str) -> String {
    format!("[Image description: {}]", text.trim())
}

fn mode_keyboard() -> InlineKeyboardMarkup {
    let row = ImageMode::ALL
        .into_iter()
        .map(|mode| InlineKeyboardButton {
            text: mode_label(mode).to_string(),
            callback_data: format!("{MODE_CALLBACK_PREFIX}{mode}"),
        })
        .collect();
    InlineKeyboardMarkup {
        inline_keyboard: vec![row],
    }
}

fn mode_label(mode: ImageMode) -> &'static str {
    match mode {
        ImageMode::Auto => "Send photo (auto)",
        ImageMode::Text => "Describe in text (text)",
    }
}

fn log_generation_failure(user_id: UserId, error: &GenerationError) {
    match error {
        GenerationError::Timeout { attempts } => {
            warn!(user = %user_id, attempts, "generation timed out");
        }
        other => warn!(user = %user_id, error = %other, "generation failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakePlatform {
        sent: Mutex<Vec<OutgoingMessage>>,
        typing: Mutex<Vec<i64>>,
        callbacks: Mutex<Vec<(String, Option<String>)>>,
        downloads: Mutex<Vec<String>>,
        fail_downloads: bool,
    }

    impl FakePlatform {
        fn texts(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|m| m.text.clone())
                .collect()
        }
    }

    #[async_trait]
    impl ChatPlatform for FakePlatform {
        async fn send_message(&self, message: OutgoingMessage) -> Result<(), Report<TelegramError>> {
            self.sent.lock().unwrap().push(message);
            Ok(())
        }

        async fn send_typing(&self, chat_id: i64) -> Result<(), Report<TelegramError>> {
            self.typing.lock().unwrap().push(chat_id);
            Ok(())
        }

        async fn answer_callback(
            &self,
            callback_id: &str,
            text: Option<&str>,
        ) -> Result<(), Report<TelegramError>> {
            self.callbacks
                .lock()
                .unwrap()
                .push((callback_id.to_string(), text.map(str::to_string)));
            Ok(())
        }

        async fn download_photo(&self, photo: &PhotoSize) -> Result<Vec<u8>, Report<TelegramError>> {
            self.downloads.lock().unwrap().push(photo.file_id.clone());
            if self.fail_downloads {
                return Err(TelegramError::Download {
                    file_id: photo.file_id.clone(),
                    reason: "HTTP 404".to_string(),
                }
                .into());
            }
            Ok(vec![0xFF, 0xD8, 0xFF])
        }
    }

    #[derive(Default)]
    struct FakeGenerator {
        responses: Mutex<VecDeque<Result<String, GenerationError>>>,
        prompts: Mutex<Vec<Prompt>>,
    }

    impl FakeGenerator {
        fn answering(responses: impl IntoIterator<Item = Result<String, GenerationError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                prompts: Mutex::default(),
            }
        }
    }

    #[async_trait]
    impl Generator for FakeGenerator {
        async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("default answer".to_string()))
        }
    }

    const USER: i64 = 42;

    fn relay(generator: FakeGenerator) -> Relay<FakePlatform, FakeGenerator> {
        Relay::new(FakePlatform::default(), generator, ConversationStore::default())
    }

    fn text_update(text: &str) -> Update {
        serde_json::from_value(json!({
            "update_id": 1,
            "message": {
                "message_id": 7,
                "from": {"id": USER, "is_bot": false, "first_name": "Ann"},
                "chat": {"id": 100, "type": "private"},
                "text": text
            }
        }))
        .unwrap()
    }

    fn photo_update(caption: Option<&str>) -> Update {
        let mut message = json!({
            "message_id": 8,
            "from": {"id": USER, "is_bot": false, "first_name": "Ann"},
            "chat": {"id": 100, "type": "private"},
            "photo": [
                {"file_id": "thumb", "width": 90, "height": 90, "file_size": 900},
                {"file_id": "full", "width": 1280, "height": 720, "file_size": 80000}
            ]
        });
        if let Some(caption) = caption {
            message["caption"] = json!(caption);
        }
        serde_json::from_value(json!({"update_id": 2, "message": message})).unwrap()
    }

    fn callback_update(data: &str) -> Update {
        serde_json::from_value(json!({
            "update_id": 3,
            "callback_query": {
                "id": "cb-1",
                "from": {"id": USER, "is_bot": false, "first_name": "Ann"},
                "message": {"message_id": 9, "chat": {"id": 100, "type": "private"}},
                "data": data
            }
        }))
        .unwrap()
    }

    fn user() -> UserId {
        UserId::new(USER)
    }

    #[tokio::test]
    async fn text_message_is_answered_and_recorded() {
        let relay = relay(FakeGenerator::answering([Ok("Hi there!".to_string())]));

        relay.handle_update(text_update("hello")).await.unwrap();

        let prompts = relay.generator.prompts.lock().unwrap().clone();
        assert_eq!(prompts, [Prompt::Text("User: hello".to_string())]);

        let sent = relay.platform.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].text, "Hi there!");
        assert_eq!(sent[0].chat_id, 100);
        assert_eq!(sent[0].reply_to_message_id, Some(7));
        assert_eq!(*relay.platform.typing.lock().unwrap(), [100]);

        let turns = relay.history().get(user());
        assert_eq!(render_transcript(&turns), "User: hello\nAssistant: Hi there!");
    }

    #[tokio::test]
    async fn history_is_included_in_later_prompts() {
        let relay = relay(FakeGenerator::answering([
            Ok("Nice to meet you, Ann.".to_string()),
            Ok("Your name is Ann.".to_string()),
        ]));

        relay.handle_update(text_update("my name is Ann")).await.unwrap();
        relay.handle_update(text_update("what is my name?")).await.unwrap();

        let prompts = relay.generator.prompts.lock().unwrap().clone();
        assert_eq!(
            prompts[1].text_part(),
            "User: my name is Ann\nAssistant: Nice to meet you, Ann.\nUser: what is my name?"
        );
        assert_eq!(relay.history().len(user()), 4);
    }

    #[tokio::test]
    async fn failed_generation_replies_and_records_nothing() {
        let relay = relay(FakeGenerator::answering([Err(GenerationError::Timeout {
            attempts: 15,
        })]));

        relay.handle_update(text_update("hello")).await.unwrap();

        assert_eq!(
            relay.platform.texts(),
            ["The response timed out, please try again."]
        );
        assert!(relay.history().get(user()).is_empty());
    }

    #[tokio::test]
    async fn transport_failure_reports_status() {
        let relay = relay(FakeGenerator::answering([Err(GenerationError::Transport {
            status: Some(502),
            reason: "bad gateway".to_string(),
        })]));

        relay.handle_update(text_update("hello")).await.unwrap();

        let texts = relay.platform.texts();
        assert!(texts[0].contains("502"));
        assert_eq!(relay.history().len(user()), 0);
    }

    #[tokio::test]
    async fn clear_command_resets_history() {
        let relay = relay(FakeGenerator::default());
        relay.handle_update(text_update("hello")).await.unwrap();
        assert_eq!(relay.history().len(user()), 2);

        relay.handle_update(text_update("/clear")).await.unwrap();

        assert!(relay.history().get(user()).is_empty());
        assert_eq!(relay.platform.texts().last().unwrap(), HISTORY_CLEARED);
        assert_eq!(relay.generator.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn clear_cancels_pending_image_description() {
        let relay = relay(FakeGenerator::default());
        relay.modes().set_mode(user(), ImageMode::Text);
        relay.handle_update(photo_update(None)).await.unwrap();

        relay.handle_update(text_update("/clear")).await.unwrap();
        relay.handle_update(text_update("hello")).await.unwrap();

        let prompts = relay.generator.prompts.lock().unwrap().clone();
        assert_eq!(prompts, [Prompt::Text("User: hello".to_string())]);
        assert_eq!(relay.modes().mode(user()), ImageMode::Text);
    }

    #[tokio::test]
    async fn start_with_bot_mention_shows_help() {
        let relay = relay(FakeGenerator::default());

        relay
            .handle_update(text_update("/start@genrelay_bot"))
            .await
            .unwrap();

        assert_eq!(relay.platform.texts(), [HELP_TEXT]);
        assert!(relay.generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_command_is_a_prompt() {
        let relay = relay(FakeGenerator::default());

        relay.handle_update(text_update("/weather")).await.unwrap();

        let prompts = relay.generator.prompts.lock().unwrap().clone();
        assert_eq!(prompts[0].text_part(), "User: /weather");
    }

    #[tokio::test]
    async fn photo_in_auto_mode_sends_largest_image() {
        let relay = relay(FakeGenerator::answering([Ok("A cat.".to_string())]));

        relay
            .handle_update(photo_update(Some("what animal?")))
            .await
            .unwrap();

        assert_eq!(*relay.platform.downloads.lock().unwrap(), ["full"]);
        let prompts = relay.generator.prompts.lock().unwrap().clone();
        assert_eq!(
            prompts[0],
            Prompt::Image {
                caption: "what animal?".to_string(),
                image: vec![0xFF, 0xD8, 0xFF],
            }
        );

        let turns = relay.history().get(user());
        assert_eq!(turns[0].text, "[Image] what animal?");
        assert_eq!(turns[1].text, "A cat.");
    }

    #[tokio::test]
    async fn photo_without_caption_uses_default_and_history() {
        let relay = relay(FakeGenerator::answering([
            Ok("Hello.".to_string()),
            Ok("A dog.".to_string()),
        ]));
        relay.handle_update(text_update("hi")).await.unwrap();

        relay.handle_update(photo_update(None)).await.unwrap();

        let prompts = relay.generator.prompts.lock().unwrap().clone();
        assert_eq!(
            prompts[1].text_part(),
            format!("User: hi\nAssistant: Hello.\n{DEFAULT_IMAGE_CAPTION}")
        );
        let turns = relay.history().get(user());
        assert_eq!(turns[2].text, format!("[Image] {DEFAULT_IMAGE_CAPTION}"));
    }

    #[tokio::test]
    async fn photo_download_failure_is_reported() {
        let platform = FakePlatform {
            fail_downloads: true,
            ..FakePlatform::default()
        };
        let relay = Relay::new(platform, FakeGenerator::default(), ConversationStore::default());

        relay.handle_update(photo_update(None)).await.unwrap();

        assert_eq!(relay.platform.texts(), [DOWNLOAD_FAILED]);
        assert!(relay.generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn photo_in_text_mode_uses_caption_as_description() {
        let relay = relay(FakeGenerator::default());
        relay.modes().set_mode(user(), ImageMode::Text);

        relay.handle_update(photo_update(Some("a red car"))).await.unwrap();

        assert!(relay.platform.downloads.lock().unwrap().is_empty());
        let prompts = relay.generator.prompts.lock().unwrap().clone();
        assert_eq!(
            prompts[0],
            Prompt::Text("User: [Image description: a red car]".to_string())
        );
    }

    #[tokio::test]
    async fn photo_in_text_mode_without_caption_asks_for_description() {
        let relay = relay(FakeGenerator::default());
        relay.modes().set_mode(user(), ImageMode::Text);

        relay.handle_update(photo_update(None)).await.unwrap();
        assert_eq!(relay.platform.texts(), [DESCRIBE_IMAGE]);
        assert!(relay.generator.prompts.lock().unwrap().is_empty());

        relay.handle_update(text_update("a sunset")).await.unwrap();
        relay.handle_update(text_update("thanks")).await.unwrap();

        let prompts = relay.generator.prompts.lock().unwrap().clone();
        assert_eq!(prompts[0].text_part(), "User: [Image description: a sunset]");
        assert!(prompts[1].text_part().ends_with("User: thanks"));
    }

    #[tokio::test]
    async fn mode_command_shows_keyboard() {
        let relay = relay(FakeGenerator::default());

        relay.handle_update(text_update("/mode")).await.unwrap();

        let sent = relay.platform.sent.lock().unwrap().clone();
        let keyboard = sent[0].reply_markup.as_ref().unwrap();
        let data: Vec<_> = keyboard.inline_keyboard[0]
            .iter()
            .map(|b| b.callback_data.as_str())
            .collect();
        assert_eq!(data, ["mode:auto", "mode:text"]);
        assert!(sent[0].text.contains("auto"));
    }

    #[tokio::test]
    async fn mode_callback_changes_mode() {
        let relay = relay(FakeGenerator::default());

        relay.handle_update(callback_update("mode:text")).await.unwrap();

        assert_eq!(relay.modes().mode(user()), ImageMode::Text);
        let callbacks = relay.platform.callbacks.lock().unwrap().clone();
        assert_eq!(callbacks[0].0, "cb-1");
        assert_eq!(relay.platform.texts(), ["Image mode set to: text"]);
    }

    #[tokio::test]
    async fn unknown_callback_is_acknowledged_only() {
        let relay = relay(FakeGenerator::default());

        relay.handle_update(callback_update("mode:video")).await.unwrap();

        assert_eq!(relay.modes().mode(user()), ImageMode::Auto);
        assert_eq!(relay.platform.callbacks.lock().unwrap().len(), 1);
        assert!(relay.platform.texts().is_empty());
    }

    #[tokio::test]
    async fn long_answers_are_split() {
        let answer = "x".repeat(MAX_MESSAGE_CHARS + 10);
        let relay = relay(FakeGenerator::answering([Ok(answer.clone())]));

        relay.handle_update(text_update("write a lot")).await.unwrap();

        let sent = relay.platform.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].reply_to_message_id, Some(7));
        assert_eq!(sent[1].reply_to_message_id, None);
        assert_eq!(relay.history().get(user())[1].text, answer);
    }

    #[tokio::test]
    async fn messages_without_sender_are_ignored() {
        let relay = relay(FakeGenerator::default());
        let update: Update = serde_json::from_value(json!({
            "update_id": 4,
            "message": {"message_id": 1, "chat": {"id": -5, "type": "channel"}, "text": "post"}
        }))
        .unwrap();

        relay.handle_update(update).await.unwrap();

        assert!(relay.platform.texts().is_empty());
    }

    #[tokio::test]
    async fn messages_from_bots_are_ignored() {
        let relay = relay(FakeGenerator::default());
        let update: Update = serde_json::from_value(json!({
            "update_id": 5,
            "message": {
                "message_id": 2,
                "from": {"id": 99, "is_bot": true, "first_name": "Echo"},
                "chat": {"id": 100, "type": "group"},
                "text": "hello"
            }
        }))
        .unwrap();

        relay.handle_update(update).await.unwrap();

        assert!(relay.platform.texts().is_empty());
        assert!(relay.generator.prompts.lock().unwrap().is_empty());
        assert_eq!(relay.history().len(UserId::new(99)), 0);
    }
}
