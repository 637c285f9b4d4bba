use crate::domain::model::Rate;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One upstream rate provider. A single fetch attempt either yields a rate or a
/// typed failure; retrying is the caller's decision.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch(&self) -> Result<Rate>;
}

/// Outbound message delivery to one recipient.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, chat_id: i64, text: &str) -> Result<()>;
}
