use anyhow::Context;
use chrono::FixedOffset;
use clap::Parser;
use rate_notifier::telegram::{Bot, TelegramClient};
use rate_notifier::utils::{logger, validation::Validate};
use rate_notifier::{CliConfig, DailyTrigger, RateService, SubscriberStore};
use std::time::Duration;

#[cfg(not(feature = "bank-page"))]
use rate_notifier::MarketApiSource as Source;
#[cfg(feature = "bank-page")]
use rate_notifier::BankPageSource as Source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    let token = config
        .bot_token()
        .context("set TELEGRAM_BOT_TOKEN to the bot authentication token")?;

    let offset = FixedOffset::east_opt(config.utc_offset_hours * 3600)
        .context("utc_offset_hours is out of range")?;
    let trigger = DailyTrigger::new(config.notify_hour, config.notify_minute, offset)
        .context("notify_hour/notify_minute do not form a valid time")?;

    let store = SubscriberStore::load(&config.subscribers_file);
    let client = TelegramClient::new(&token)?;
    let source = Source::new(&config.endpoint)?;
    let service = RateService::new(source, offset);

    tracing::info!("AUD to VND exchange rate bot started");
    tracing::info!("Loaded {} subscribers", store.len());
    tracing::info!(
        "Daily notifications scheduled for {:02}:{:02} (UTC{:+})",
        config.notify_hour,
        config.notify_minute,
        config.utc_offset_hours
    );
    tracing::info!("Using endpoint: {}", config.endpoint);

    let bot = Bot::new(
        client,
        service,
        store,
        trigger,
        Duration::from_millis(config.broadcast_delay_ms),
    );

    bot.run().await?;
    Ok(())
}
