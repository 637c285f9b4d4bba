use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, NaiveTime, TimeZone, Utc};
use std::time::Duration;

/// Fires once per calendar day at a fixed local wall-clock time in a fixed
/// UTC offset. No timezone database; DST regions are out of scope.
#[derive(Debug, Clone, Copy)]
pub struct DailyTrigger {
    fire_at: NaiveTime,
    offset: FixedOffset,
}

impl DailyTrigger {
    pub fn new(hour: u32, minute: u32, offset: FixedOffset) -> Option<Self> {
        let fire_at = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(Self { fire_at, offset })
    }

    /// Next instant at or after `now` when the local clock reads the target time.
    pub fn next_fire(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let local_now = now.with_timezone(&self.offset);
        let mut target_date = local_now.date_naive();
        if local_now.time() >= self.fire_at {
            target_date += ChronoDuration::days(1);
        }

        let target = target_date.and_time(self.fire_at);
        // Fixed offsets have no gaps or folds, so the mapping is unambiguous.
        match self.offset.from_local_datetime(&target).single() {
            Some(instant) => instant.with_timezone(&Utc),
            None => now + ChronoDuration::days(1),
        }
    }

    pub fn delay_from(&self, now: DateTime<Utc>) -> Duration {
        (self.next_fire(now) - now)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Suspends until the next scheduled firing.
    pub async fn wait(&self) {
        tokio::time::sleep(self.delay_from(Utc::now())).await;
    }
}
