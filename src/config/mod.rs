use crate::utils::error::{NotifierError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::Parser;

pub const TOKEN_ENV_VAR: &str = "TELEGRAM_BOT_TOKEN";

#[cfg(not(feature = "bank-page"))]
const DEFAULT_ENDPOINT: &str = "https://open.er-api.com/v6/latest/AUD";
#[cfg(feature = "bank-page")]
const DEFAULT_ENDPOINT: &str = "https://webgia.com/ty-gia/mbbank/";

#[derive(Debug, Clone, Parser)]
#[command(name = "rate-notifier")]
#[command(about = "Telegram bot reporting the AUD to VND exchange rate")]
pub struct CliConfig {
    /// Upstream rate endpoint (JSON API or HTML page, depending on build variant).
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Durable subscriber file (JSON array of chat ids).
    #[arg(long, default_value = "subscribers.json")]
    pub subscribers_file: String,

    /// Local hour of the daily broadcast.
    #[arg(long, default_value = "9")]
    pub notify_hour: u32,

    /// Local minute of the daily broadcast.
    #[arg(long, default_value = "0")]
    pub notify_minute: u32,

    /// UTC offset in hours for the schedule and message timestamps.
    #[arg(long, default_value = "7")]
    pub utc_offset_hours: i32,

    /// Pause between consecutive broadcast sends, in milliseconds.
    #[arg(long, default_value = "100")]
    pub broadcast_delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Reads the bot token from the environment. There is deliberately no
    /// fallback value: a missing token is a configuration error.
    pub fn bot_token(&self) -> Result<String> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(NotifierError::MissingConfig {
                field: TOKEN_ENV_VAR.to_string(),
            }),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_path("subscribers_file", &self.subscribers_file)?;
        validate_range("notify_hour", self.notify_hour, 0, 23)?;
        validate_range("notify_minute", self.notify_minute, 0, 59)?;
        validate_range("utc_offset_hours", self.utc_offset_hours, -12, 14)?;
        Ok(())
    }
}
