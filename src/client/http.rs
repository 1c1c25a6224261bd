use crate::client::state::OutboundMessage;
use crate::forms::{SendMessageRequest, SendMessageResponse};
use crate::models::{Message, ThreadSummary};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Api { status: u16, body: String },
}

#[derive(Debug, Deserialize)]
struct CreatedThread {
    id: String,
}

/// HTTP client for the parley server's JSON surface.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            // No overall timeout: a send blocks on the collaborator
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_threads(&self) -> Result<Vec<ThreadSummary>, ClientError> {
        let url = format!("{}/threads", self.base_url);
        Self::decode(self.http.get(&url).send().await?).await
    }

    pub async fn create_thread(&self) -> Result<String, ClientError> {
        let url = format!("{}/threads", self.base_url);
        let created: CreatedThread = Self::decode(self.http.post(&url).send().await?).await?;
        Ok(created.id)
    }

    pub async fn list_messages(&self, thread_id: &str) -> Result<Vec<Message>, ClientError> {
        let url = format!("{}/messages", self.base_url);
        let request = self.http.get(&url).query(&[("threadId", thread_id)]);
        Self::decode(request.send().await?).await
    }

    pub async fn send_message(
        &self,
        outbound: &OutboundMessage,
    ) -> Result<SendMessageResponse, ClientError> {
        let url = format!("{}/messages", self.base_url);
        let body = SendMessageRequest {
            thread_id: outbound.thread_id.clone(),
            content: outbound.content.clone(),
            history: outbound.history.clone(),
        };
        Self::decode(self.http.post(&url).json(&body).send().await?).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
