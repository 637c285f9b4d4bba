//! User-facing message templates (Telegram HTML parse mode).

use crate::domain::model::Rate;

pub const FETCHING_NOTICE: &str = "⏳ Fetching current AUD to VND rate...";

pub fn welcome() -> &'static str {
    "👋 <b>Welcome to the AUD to VND Exchange Rate Bot!</b>\n\n\
     This bot helps you monitor the AUD to VND exchange rate.\n\n\
     <b>Available commands:</b>\n\
     💱 /rate - Get current AUD to VND rate\n\
     🔔 /subscribe - Get daily rate updates at 9:00 AM (VN time)\n\
     🔕 /unsubscribe - Stop daily updates\n\
     ❓ /help - Show detailed help\n\n\
     Start by typing /rate to see the current exchange rate!"
}

pub fn help_text() -> &'static str {
    "🤖 <b>AUD to VND Exchange Rate Bot - Help</b>\n\n\
     <b>Commands:</b>\n\n\
     💱 <b>/rate</b>\n\
     Get the current AUD to VND exchange rate\n\n\
     🔔 <b>/subscribe</b>\n\
     Subscribe to daily rate notifications at 9:00 AM Vietnam time\n\n\
     🔕 <b>/unsubscribe</b>\n\
     Unsubscribe from daily notifications\n\n\
     ❓ <b>/help</b>\n\
     Show this help message\n\n\
     <b>Note:</b> Bank rates may differ slightly from market rates."
}

pub fn rate_reply(rate: &Rate, timestamp: &str) -> String {
    format!(
        "💱 <b>AUD to VND Exchange Rate</b>\n\n\
         🇦🇺 Currency: <b>{} → VND</b> 🇻🇳\n\
         📊 Current Rate:\n\
         <b>{} VND</b>\n\n\
         🕐 Updated: {}\n\n\
         <i>Note: Bank rates may differ slightly from market rates.</i>",
        rate.currency, rate.value, timestamp
    )
}

pub fn rate_error_reply(reason: &str) -> String {
    format!(
        "❌ <b>Error Fetching Rate</b>\n\n\
         {reason}\n\n\
         Please try again later."
    )
}

pub fn daily_update(rate: &Rate, timestamp: &str) -> String {
    format!(
        "🌅 <b>Daily Exchange Rate Update</b>\n\n\
         💱 {} → VND\n\
         📊 Current Rate:\n\
         <b>{} VND</b>\n\n\
         🕐 {} (Vietnam Time)\n\n\
         💡 Use /rate to check anytime!",
        rate.currency, rate.value, timestamp
    )
}

pub fn daily_update_error(reason: &str) -> String {
    format!(
        "⚠️ <b>Daily Rate Update - Error</b>\n\n\
         Unable to fetch today's rate:\n{reason}\n\n\
         Use /rate to try again manually."
    )
}

pub fn subscribed(name: &str) -> String {
    format!(
        "✅ <b>Successfully subscribed!</b>\n\n\
         Hi {name}, you will now receive daily AUD to VND exchange rate updates \
         at 9:00 AM (Vietnam time).\n\n\
         Use /unsubscribe anytime to stop receiving updates."
    )
}

pub fn already_subscribed(name: &str) -> String {
    format!(
        "✅ Hi {name}! You are already subscribed to daily rate updates.\n\n\
         You will receive notifications every day at 9:00 AM (Vietnam time)."
    )
}

pub fn unsubscribed(name: &str) -> String {
    format!(
        "✅ <b>Successfully unsubscribed</b>\n\n\
         Hi {name}, you will no longer receive daily rate updates.\n\n\
         Use /subscribe anytime to start receiving updates again."
    )
}

pub fn not_subscribed(name: &str) -> String {
    format!(
        "ℹ️ Hi {name}, you are not currently subscribed to daily updates.\n\n\
         Use /subscribe to start receiving daily rate updates."
    )
}
