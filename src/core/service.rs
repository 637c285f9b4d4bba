use crate::core::messages;
use crate::domain::ports::RateSource;
use chrono::{FixedOffset, Utc};

/// Composes user-facing rate messages from a single fetch attempt.
/// Fetch failures are surfaced verbatim; retrying is left to the user.
pub struct RateService<R: RateSource> {
    source: R,
    display_offset: FixedOffset,
}

impl<R: RateSource> RateService<R> {
    pub fn new(source: R, display_offset: FixedOffset) -> Self {
        Self {
            source,
            display_offset,
        }
    }

    /// Reply for an on-demand /rate request.
    pub async fn rate_message(&self) -> String {
        match self.source.fetch().await {
            Ok(rate) => messages::rate_reply(&rate, &self.timestamp()),
            Err(err) => {
                tracing::warn!("Rate fetch failed: {}", err);
                messages::rate_error_reply(&err.to_string())
            }
        }
    }

    /// Message for the scheduled daily broadcast. A failed fetch still
    /// produces a message so subscribers learn the update is unavailable.
    pub async fn daily_message(&self) -> String {
        match self.source.fetch().await {
            Ok(rate) => messages::daily_update(&rate, &self.timestamp()),
            Err(err) => {
                tracing::warn!("Daily rate fetch failed: {}", err);
                messages::daily_update_error(&err.to_string())
            }
        }
    }

    fn timestamp(&self) -> String {
        Utc::now()
            .with_timezone(&self.display_offset)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
