use crate::core::broadcast::Broadcaster;
use crate::core::messages;
use crate::core::schedule::DailyTrigger;
use crate::core::service::RateService;
use crate::domain::ports::RateSource;
use crate::store::SubscriberStore;
use crate::telegram::client::{TelegramClient, Update};
use crate::utils::error::Result;
use chrono::Utc;
use std::time::Duration;

/// Server-side hold for getUpdates long polls.
const POLL_SECS: u64 = 50;

/// Backoff after a failed poll before asking again.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Single-loop bot driver: one task owns the subscriber store and alternates
/// between the update long poll and the daily broadcast trigger, so all
/// mutation of shared state stays serialized.
pub struct Bot<R: RateSource> {
    client: TelegramClient,
    service: RateService<R>,
    store: SubscriberStore,
    broadcaster: Broadcaster<TelegramClient>,
    trigger: DailyTrigger,
    update_offset: i64,
}

impl<R: RateSource> Bot<R> {
    pub fn new(
        client: TelegramClient,
        service: RateService<R>,
        store: SubscriberStore,
        trigger: DailyTrigger,
        send_delay: Duration,
    ) -> Self {
        let broadcaster = Broadcaster::with_send_delay(client.clone(), send_delay);
        Self {
            client,
            service,
            store,
            broadcaster,
            trigger,
            update_offset: 0,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        loop {
            // Both futures own their inputs so the handlers below can borrow
            // the bot mutably. A long poll cancelled by the timer is harmless:
            // the offset was not advanced, so updates are redelivered.
            let wait = self.trigger.delay_from(Utc::now());
            let poll_client = self.client.clone();
            let offset = self.update_offset;

            tokio::select! {
                _ = tokio::time::sleep(wait) => {
                    self.send_daily_update().await;
                }
                polled = async move { poll_client.get_updates(offset, POLL_SECS).await } => {
                    match polled {
                        Ok(updates) => {
                            for update in updates {
                                self.update_offset = self.update_offset.max(update.update_id + 1);
                                if let Err(err) = self.handle_update(update).await {
                                    // Process-level error boundary: log and keep serving.
                                    tracing::error!("Command handler failed: {}", err);
                                }
                            }
                        }
                        Err(err) => {
                            tracing::error!("Error while getting updates: {}", err);
                            tokio::time::sleep(POLL_RETRY_DELAY).await;
                        }
                    }
                }
            }
        }
    }

    async fn handle_update(&mut self, update: Update) -> Result<()> {
        let Some(message) = update.message else {
            return Ok(());
        };
        let Some(text) = message.text else {
            return Ok(());
        };

        let chat_id = message.chat.id;
        let name = message
            .from
            .map(|user| user.first_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string());

        // "/rate@SomeBot arg" -> "/rate"
        let command = text
            .split_whitespace()
            .next()
            .and_then(|word| word.split('@').next())
            .unwrap_or("");

        let reply = match command {
            "/start" => messages::welcome().to_string(),
            "/help" => messages::help_text().to_string(),
            "/rate" => {
                self.client
                    .send_message(chat_id, messages::FETCHING_NOTICE)
                    .await?;
                self.service.rate_message().await
            }
            "/subscribe" => {
                if self.store.add(chat_id) {
                    tracing::info!("Chat {} ({}) subscribed to daily updates", chat_id, name);
                    messages::subscribed(&name)
                } else {
                    messages::already_subscribed(&name)
                }
            }
            "/unsubscribe" => {
                if self.store.remove(chat_id) {
                    tracing::info!("Chat {} ({}) unsubscribed from daily updates", chat_id, name);
                    messages::unsubscribed(&name)
                } else {
                    messages::not_subscribed(&name)
                }
            }
            _ => return Ok(()),
        };

        self.client.send_message(chat_id, &reply).await
    }

    async fn send_daily_update(&mut self) {
        if self.store.is_empty() {
            tracing::info!("No subscribers for the daily rate update");
            return;
        }

        tracing::info!("Sending daily rate to {} subscribers", self.store.len());
        let message = self.service.daily_message().await;
        let recipients = self.store.snapshot();
        self.broadcaster.broadcast(&recipients, &message).await;
    }
}
