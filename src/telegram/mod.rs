pub mod bot;
pub mod client;

pub use bot::Bot;
pub use client::{TelegramClient, Update};
