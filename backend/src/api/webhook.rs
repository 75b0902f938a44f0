use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook responded with {0}")]
    Upstream(StatusCode),
}

/// Posts form submissions to the automation webhook.
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    url: Url,
}

impl WebhookClient {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, WebhookError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends `body` as is. Returns the upstream JSON, or `{}` when the
    /// upstream answered 2xx with something that is not JSON.
    pub async fn forward(&self, body: &Value) -> Result<Value, WebhookError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Upstream(status));
        }

        Ok(response.json::<Value>().await.unwrap_or_else(|_| json!({})))
    }
}
