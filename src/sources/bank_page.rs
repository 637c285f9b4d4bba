use crate::domain::model::Rate;
use crate::domain::ports::RateSource;
use crate::sources::{classify_transport_error, BROWSER_USER_AGENT, REQUEST_TIMEOUT};
use crate::utils::error::{NotifierError, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};

const TARGET_CURRENCY: &str = "AUD";

/// Minimum columns a rate row carries: code, name, buy cash, buy transfer,
/// sell cash, sell transfer.
const MIN_CELLS: usize = 6;

/// Index of the sell/transfer rate cell within a row.
const SELL_TRANSFER_CELL: usize = 5;

/// Scrapes a bank exchange-rate HTML page for the AUD sell/transfer rate.
/// The page structure is uncontrolled, so every missing element is a typed
/// failure rather than a fault.
pub struct BankPageSource {
    client: Client,
    endpoint: String,
}

impl BankPageSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RateSource for BankPageSource {
    async fn fetch(&self) -> Result<Rate> {
        tracing::debug!("Requesting rate page: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9,vi;q=0.8")
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        tracing::debug!("Page response status: {}", status);
        if !status.is_success() {
            return Err(NotifierError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(classify_transport_error)?;
        let value = extract_sell_rate(&html)?;

        Ok(Rate::new(value, TARGET_CURRENCY))
    }
}

/// Walks the first table on the page looking for the AUD row and returns the
/// cleaned sell/transfer rate as a plain decimal string ("16,500.50" -> "16500.50").
fn extract_sell_rate(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").expect("static selector");
    let row_selector = Selector::parse("tr").expect("static selector");
    let cell_selector = Selector::parse("td").expect("static selector");

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| NotifierError::structural("Exchange rate table not found on page"))?;

    let junk = Regex::new(r"[^\d,.]").expect("static regex");

    for row in table.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < MIN_CELLS {
            continue;
        }

        let currency_code: String = cells[0].text().collect();
        if !currency_code.to_uppercase().contains(TARGET_CURRENCY) {
            continue;
        }

        let raw: String = cells[SELL_TRANSFER_CELL].text().collect();
        let cleaned = junk.replace_all(raw.trim(), "");
        // Drop grouping commas so the value is a plain decimal.
        let value = cleaned.replace(',', "");

        if value.is_empty() || !value.chars().any(|c| c.is_ascii_digit()) {
            return Err(NotifierError::structural(
                "Sell rate cell did not contain a numeric value",
            ));
        }

        return Ok(value);
    }

    Err(NotifierError::structural(
        "AUD rate not found in the table. The website might have changed its structure.",
    ))
}
