use crate::domain::model::DeliveryReport;
use crate::domain::ports::MessageSender;
use std::time::Duration;

/// Default pause between consecutive sends, to stay under upstream rate limits.
pub const DEFAULT_SEND_DELAY: Duration = Duration::from_millis(100);

/// Delivers one message to every recipient in a snapshot, isolating failures:
/// one blocked or unreachable recipient never aborts delivery to the rest.
pub struct Broadcaster<S: MessageSender> {
    sender: S,
    send_delay: Duration,
}

impl<S: MessageSender> Broadcaster<S> {
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            send_delay: DEFAULT_SEND_DELAY,
        }
    }

    pub fn with_send_delay(sender: S, send_delay: Duration) -> Self {
        Self { sender, send_delay }
    }

    pub async fn broadcast(&self, recipients: &[i64], message: &str) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        if recipients.is_empty() {
            tracing::info!("No recipients, nothing to broadcast");
            return report;
        }

        tracing::info!("Broadcasting to {} recipients", recipients.len());

        for (index, &chat_id) in recipients.iter().enumerate() {
            match self.sender.send(chat_id, message).await {
                Ok(()) => report.succeeded += 1,
                Err(err) => {
                    tracing::error!("Failed to send message to chat {}: {}", chat_id, err);
                    report.failed += 1;
                }
            }

            if index + 1 < recipients.len() {
                tokio::time::sleep(self.send_delay).await;
            }
        }

        tracing::info!(
            "Broadcast done: {} succeeded, {} failed",
            report.succeeded,
            report.failed
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{NotifierError, Result};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct FlakySender {
        failing: Vec<i64>,
        delivered: Arc<Mutex<Vec<i64>>>,
    }

    #[async_trait]
    impl MessageSender for FlakySender {
        async fn send(&self, chat_id: i64, _text: &str) -> Result<()> {
            if self.failing.contains(&chat_id) {
                return Err(NotifierError::delivery(format!("chat {chat_id} blocked bot")));
            }
            self.delivered.lock().unwrap().push(chat_id);
            Ok(())
        }
    }

    fn flaky(failing: Vec<i64>) -> (FlakySender, Arc<Mutex<Vec<i64>>>) {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        (
            FlakySender {
                failing,
                delivered: delivered.clone(),
            },
            delivered,
        )
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_rest() {
        let (sender, delivered) = flaky(vec![2]);
        let broadcaster = Broadcaster::with_send_delay(sender, Duration::ZERO);

        let report = broadcaster.broadcast(&[1, 2, 3], "hello").await;

        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        let delivered = delivered.lock().unwrap();
        assert!(delivered.contains(&1));
        assert!(delivered.contains(&3));
    }

    #[tokio::test]
    async fn test_failure_position_does_not_matter() {
        for order in [[2i64, 1, 3], [1, 3, 2], [3, 2, 1]] {
            let (sender, _) = flaky(vec![2]);
            let broadcaster = Broadcaster::with_send_delay(sender, Duration::ZERO);
            let report = broadcaster.broadcast(&order, "hello").await;
            assert_eq!(report.succeeded, 2);
            assert_eq!(report.failed, 1);
        }
    }

    #[tokio::test]
    async fn test_empty_recipient_list_is_a_noop() {
        let (sender, delivered) = flaky(vec![]);
        let broadcaster = Broadcaster::with_send_delay(sender, Duration::ZERO);

        let report = broadcaster.broadcast(&[], "hello").await;

        assert_eq!(report, DeliveryReport::default());
        assert!(delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_all_failures_counted() {
        let (sender, _) = flaky(vec![1, 2]);
        let broadcaster = Broadcaster::with_send_delay(sender, Duration::ZERO);

        let report = broadcaster.broadcast(&[1, 2], "hello").await;

        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failed, 2);
    }
}
