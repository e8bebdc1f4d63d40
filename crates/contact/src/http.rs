use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;

use crate::{ContactMessage, ContactSender, SendError};

#[derive(Debug, Deserialize)]
struct ContactReply {
    ok: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Posts contact messages as JSON to the site's backend API.
#[derive(Clone, Debug)]
pub struct HttpContactSender {
    client: Client,
    endpoint: String,
}

impl HttpContactSender {
    pub fn new(base_url: &str, contact_path: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self::with_client(client, base_url, contact_path))
    }

    pub fn with_client(client: Client, base_url: &str, contact_path: &str) -> Self {
        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            contact_path.trim_start_matches('/')
        );

        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSender for HttpContactSender {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), SendError> {
        let response = self.client.post(&self.endpoint).json(message).send().await?;
        let status = response.status();

        let is_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim_start().starts_with("text/html"));

        if is_html {
            tracing::warn!(%status, "contact API answered with an HTML page");
            return Err(SendError::HtmlResponse);
        }

        let body = response.bytes().await?;
        let reply: ContactReply = serde_json::from_slice(&body)
            .map_err(|err| SendError::MalformedResponse(err.to_string()))?;

        // a positive reply only counts when the status agrees
        if reply.ok && status.is_success() {
            return Ok(());
        }

        tracing::debug!(
            %status,
            ok = reply.ok,
            message = ?reply.message,
            "contact API rejected the message"
        );

        Err(match reply.message {
            Some(message) => SendError::from_message(message),
            None => SendError::Rejected(status.to_string()),
        })
    }
}
