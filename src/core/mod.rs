pub mod broadcast;
pub mod messages;
pub mod schedule;
pub mod service;

pub use crate::domain::model::{DeliveryReport, Rate};
pub use crate::domain::ports::{MessageSender, RateSource};
pub use crate::utils::error::Result;
