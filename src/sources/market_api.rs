use crate::domain::model::Rate;
use crate::domain::ports::RateSource;
use crate::sources::{classify_transport_error, BROWSER_USER_AGENT, REQUEST_TIMEOUT};
use crate::utils::error::{NotifierError, Result};
use crate::utils::format::format_rate;
use async_trait::async_trait;
use reqwest::Client;

const TARGET_CURRENCY: &str = "VND";

/// Fetches the AUD rate table from a structured exchange-rate JSON API and
/// extracts the VND entry.
pub struct MarketApiSource {
    client: Client,
    endpoint: String,
}

impl MarketApiSource {
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
impl RateSource for MarketApiSource {
    async fn fetch(&self) -> Result<Rate> {
        tracing::debug!("Requesting rates from: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(NotifierError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: api::Response = response.json().await.map_err(classify_transport_error)?;

        if body.result != "success" {
            let kind = body.error_type.as_deref().unwrap_or("Unknown error");
            return Err(NotifierError::structural(format!("API error: {kind}")));
        }

        let vnd_rate = body.rates.get(TARGET_CURRENCY).ok_or_else(|| {
            NotifierError::structural(format!("{TARGET_CURRENCY} rate not found in API response"))
        })?;

        Ok(Rate::new(format_rate(*vnd_rate), "AUD"))
    }
}

mod api {
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Deserialize, Debug)]
    pub struct Response {
        #[serde(default)]
        pub result: String,
        #[serde(default)]
        pub rates: HashMap<String, f64>,
        #[serde(rename = "error-type")]
        pub error_type: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_formats_vnd_rate() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v6/latest/AUD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "result": "success",
                    "rates": { "VND": 16500.5, "USD": 0.65 }
                }));
        });

        let source = MarketApiSource::new(server.url("/v6/latest/AUD")).unwrap();
        let rate = source.fetch().await.unwrap();

        api_mock.assert();
        assert_eq!(rate.value, "16,500.50");
        assert_eq!(rate.currency, "AUD");
    }

    #[tokio::test]
    async fn test_fetch_missing_vnd_key_is_structural() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "result": "success",
                    "rates": { "USD": 0.65 }
                }));
        });

        let source = MarketApiSource::new(server.url("/")).unwrap();
        let err = source.fetch().await.unwrap_err();

        match err {
            NotifierError::StructuralMismatch { reason } => {
                assert!(reason.contains("VND rate not found"));
            }
            other => panic!("expected StructuralMismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_non_success_result_carries_error_type() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "result": "error",
                    "error-type": "invalid-key"
                }));
        });

        let source = MarketApiSource::new(server.url("/")).unwrap();
        let err = source.fetch().await.unwrap_err();

        match err {
            NotifierError::StructuralMismatch { reason } => {
                assert_eq!(reason, "API error: invalid-key");
            }
            other => panic!("expected StructuralMismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_missing_result_field_is_structural() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "rates": { "VND": 16500.0 } }));
        });

        let source = MarketApiSource::new(server.url("/")).unwrap();
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, NotifierError::StructuralMismatch { .. }));
    }

    #[tokio::test]
    async fn test_fetch_http_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(503);
        });

        let source = MarketApiSource::new(server.url("/")).unwrap();
        let err = source.fetch().await.unwrap_err();

        match err {
            NotifierError::UpstreamStatus { status } => assert_eq!(status, 503),
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }
}
