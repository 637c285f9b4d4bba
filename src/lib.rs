pub mod config;
pub mod core;
pub mod domain;
pub mod sources;
pub mod store;
pub mod telegram;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::broadcast::Broadcaster;
pub use crate::core::schedule::DailyTrigger;
pub use crate::core::service::RateService;
pub use crate::domain::model::{DeliveryReport, Rate};
pub use crate::domain::ports::{MessageSender, RateSource};
pub use crate::sources::{BankPageSource, MarketApiSource};
pub use crate::store::SubscriberStore;
pub use crate::utils::error::{NotifierError, Result};
