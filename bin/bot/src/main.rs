use genrelay_bot::{BotError, Relay, RelayConfig, TelegramClient, poller};
use genrelay_conversation::ConversationStore;
use genrelay_generation::{GenerationClient, JsonFileDiagnostics};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> genrelay_core::Result<(), BotError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,genrelay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = RelayConfig::from_env().map_err(|e| BotError::Config {
        reason: e.to_string(),
    })?;
    tracing::info!(
        history_limit = config.history_limit,
        max_attempts = config.generation.max_attempts,
        poll_interval_ms = config.generation.poll_interval_ms,
        "Loaded configuration"
    );

    let mut generator =
        GenerationClient::from_config(config.generation.clone()).map_err(|e| BotError::Startup {
            component: "generation client".to_string(),
            reason: e.to_string(),
        })?;
    if let Some(path) = &config.debug_artifact_path {
        tracing::info!(path = %path.display(), "Writing image request debug artifacts");
        generator = generator.with_diagnostics(Arc::new(JsonFileDiagnostics::new(path)));
    }

    let telegram = TelegramClient::new(config.telegram.clone()).map_err(|e| BotError::Startup {
        component: "telegram client".to_string(),
        reason: e.to_string(),
    })?;

    // Validate the token before polling
    let me = telegram.get_me().await.map_err(|e| BotError::Startup {
        component: "telegram client".to_string(),
        reason: e.to_string(),
    })?;
    tracing::info!(
        bot_id = me.id,
        username = me.username.as_deref().unwrap_or_default(),
        "Connected to Telegram"
    );

    let relay = Arc::new(Relay::new(
        telegram.clone(),
        generator,
        ConversationStore::new(config.history_limit),
    ));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    };

    poller::run(telegram, relay, shutdown).await;
    tracing::info!("Bot stopped");
    Ok(())
}
