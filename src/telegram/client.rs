use crate::domain::ports::MessageSender;
use crate::utils::error::{NotifierError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const API_BASE: &str = "https://api.telegram.org";

/// Bound on a single send; long polls get a per-request budget instead.
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Extra headroom over the server-side long-poll window.
const POLL_GRACE: Duration = Duration::from_secs(10);

/// Minimal Telegram Bot API client: `sendMessage` and `getUpdates` only.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, API_BASE)
    }

    /// Points the client at an alternate API host. Used by tests.
    pub fn with_base_url(token: &str, base: &str) -> Result<Self> {
        let http = Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: format!("{}/bot{}", base.trim_end_matches('/'), token),
        })
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/sendMessage", self.base_url))
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await
            .map_err(|err| NotifierError::delivery(err.to_string()))?;

        let status = response.status();
        let body: ApiResult<serde_json::Value> = response
            .json()
            .await
            .map_err(|err| NotifierError::delivery(err.to_string()))?;

        if !body.ok {
            let description = body
                .description
                .unwrap_or_else(|| format!("HTTP status {status}"));
            return Err(NotifierError::delivery(description));
        }

        Ok(())
    }

    /// Long-polls for updates past `offset`. `poll_secs` is the server-side
    /// hold; the request itself gets a slightly longer client-side budget.
    pub async fn get_updates(&self, offset: i64, poll_secs: u64) -> Result<Vec<Update>> {
        let response = self
            .http
            .post(format!("{}/getUpdates", self.base_url))
            .timeout(Duration::from_secs(poll_secs) + POLL_GRACE)
            .json(&json!({
                "offset": offset,
                "timeout": poll_secs,
                "allowed_updates": ["message"],
            }))
            .send()
            .await?;

        let body: ApiResult<Vec<Update>> = response.json().await?;
        if !body.ok {
            let description = body
                .description
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(NotifierError::structural(format!(
                "getUpdates failed: {description}"
            )));
        }

        Ok(body.result.unwrap_or_default())
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send(&self, chat_id: i64, text: &str) -> Result<()> {
        self.send_message(chat_id, text).await
    }
}

#[derive(Deserialize, Debug)]
struct ApiResult<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
    pub from: Option<User>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Chat {
    pub id: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct User {
    #[serde(default)]
    pub first_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_send_message_posts_html_payload() {
        let server = MockServer::start();
        let send_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/bottest-token/sendMessage")
                .json_body_partial(r#"{ "chat_id": 42, "parse_mode": "HTML" }"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "ok": true, "result": {} }));
        });

        let client = TelegramClient::with_base_url("test-token", &server.base_url()).unwrap();
        client.send_message(42, "<b>hi</b>").await.unwrap();

        send_mock.assert();
    }

    #[tokio::test]
    async fn test_send_message_api_error_is_delivery_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/bottest-token/sendMessage");
            then.status(403)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "ok": false,
                    "description": "Forbidden: bot was blocked by the user"
                }));
        });

        let client = TelegramClient::with_base_url("test-token", &server.base_url()).unwrap();
        let err = client.send_message(42, "hi").await.unwrap_err();

        match err {
            NotifierError::Delivery { reason } => assert!(reason.contains("blocked")),
            other => panic!("expected Delivery, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_updates_parses_messages() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/bottest-token/getUpdates");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "ok": true,
                    "result": [{
                        "update_id": 7,
                        "message": {
                            "chat": { "id": 42 },
                            "text": "/rate",
                            "from": { "first_name": "Anh" }
                        }
                    }]
                }));
        });

        let client = TelegramClient::with_base_url("test-token", &server.base_url()).unwrap();
        let updates = client.get_updates(0, 0).await.unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].update_id, 7);
        let message = updates[0].message.as_ref().unwrap();
        assert_eq!(message.chat.id, 42);
        assert_eq!(message.text.as_deref(), Some("/rate"));
    }
}
