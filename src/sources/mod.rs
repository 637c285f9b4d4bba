pub mod bank_page;
pub mod market_api;

pub use bank_page::BankPageSource;
pub use market_api::MarketApiSource;

use crate::utils::error::NotifierError;
use std::time::Duration;

/// Bound on a single upstream fetch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Some upstreams reject requests from default HTTP clients.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

pub(crate) fn classify_transport_error(err: reqwest::Error) -> NotifierError {
    if err.is_timeout() {
        NotifierError::UpstreamTimeout
    } else {
        NotifierError::Http(err)
    }
}
