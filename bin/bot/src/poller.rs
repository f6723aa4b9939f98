//! Long-polling update loop.

use crate::relay::Relay;
use crate::telegram::TelegramClient;
use genrelay_generation::Generator;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Pause before retrying after a failed `getUpdates` call.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Polls Telegram for updates until `shutdown` completes.
///
/// Each update is handled on its own task, so slow generations for one user
/// do not delay others.
pub async fn run<G>(
    telegram: TelegramClient,
    relay: Arc<Relay<TelegramClient, G>>,
    shutdown: impl Future<Output = ()>,
) where
    G: Generator + 'static,
{
    tokio::pin!(shutdown);
    let mut offset: i64 = 0;

    info!("polling for updates");
    loop {
        let updates = tokio::select! {
            () = &mut shutdown => {
                info!("shutdown requested, stopping update loop");
                break;
            }
            result = telegram.get_updates(offset) => result,
        };

        let updates = match updates {
            Ok(updates) => updates,
            Err(report) => {
                warn!(error = %report, "failed to fetch updates, retrying");
                if wait_for_retry(RETRY_DELAY, shutdown.as_mut()).await {
                    continue;
                }
                info!("shutdown requested, stopping update loop");
                break;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            debug!(update_id = update.update_id, "dispatching update");

            let relay = Arc::clone(&relay);
            tokio::spawn(async move {
                if let Err(report) = relay.handle_update(update).await {
                    error!(error = %report, "failed to handle update");
                }
            });
        }
    }
}

/// Sleeps for `delay` unless `shutdown` completes first.
///
/// Returns `false` when shutdown won the race.
async fn wait_for_retry<F>(delay: Duration, shutdown: Pin<&mut F>) -> bool
where
    F: Future<Output = ()>,
{
    tokio::select! {
        () = shutdown => false,
        () = tokio::time::sleep(delay) => true,
    }
}
