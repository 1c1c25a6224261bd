use super::errors::ConnectorError;
use crate::configuration::AiSettings;
use actix_web::web;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One role/content pair in the collaborator's wire vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    pub fn system(content: &str) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: &str) -> Self {
        Self::new("user", content)
    }
}

#[async_trait]
pub trait AiConnector: Send + Sync {
    /// Run a single completion over the given turns and return the reply
    /// string. Blocks until the collaborator resolves or errors; there is no
    /// timeout on this call.
    async fn complete(&self, messages: &[ChatTurn]) -> Result<String, ConnectorError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatTurn],
}

#[derive(Deserialize)]
struct CompletionResponse {
    response: String,
}

/// HTTP client for a Workers-AI-style inference endpoint:
/// `POST {base_url}/run/{model}` with `{"messages": [...]}` answering
/// `{"response": "..."}`.
pub struct WorkersAiClient {
    base_url: String,
    model: String,
    api_token: Option<String>,
    http_client: reqwest::Client,
}

impl WorkersAiClient {
    pub fn new(settings: &AiSettings) -> Result<Self, ConnectorError> {
        // No request timeout: completions may legitimately take a while
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_token: settings.api_token.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl AiConnector for WorkersAiClient {
    #[tracing::instrument(name = "Run AI completion.", skip_all)]
    async fn complete(&self, messages: &[ChatTurn]) -> Result<String, ConnectorError> {
        let url = format!("{}/run/{}", self.base_url, self.model);
        tracing::debug!(model = %self.model, turns = messages.len(), "Requesting completion");

        let mut builder = self
            .http_client
            .post(&url)
            .json(&CompletionRequest { messages });
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::error!("AI completion request failed: {:?}", err);
            ConnectorError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "AI service returned an error");
            return Err(ConnectorError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let completion: CompletionResponse = response.json().await.map_err(|err| {
            tracing::error!("Failed to decode AI completion: {:?}", err);
            ConnectorError::InvalidResponse(err.to_string())
        })?;

        Ok(completion.response)
    }
}

pub fn init(settings: &AiSettings) -> Result<web::Data<Arc<dyn AiConnector>>, ConnectorError> {
    let client = WorkersAiClient::new(settings)?;
    let connector: Arc<dyn AiConnector> = Arc::new(client);
    Ok(web::Data::new(connector))
}
