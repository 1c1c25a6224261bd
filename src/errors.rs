use crate::connectors::ConnectorError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required request parameter is absent
    #[error("{0} is required")]
    MissingParameter(&'static str),
    /// The AI collaborator call failed; nothing was persisted for the turn
    #[error(transparent)]
    Collaborator(#[from] ConnectorError),
    /// A storage query failed
    #[error("{context}: {details}")]
    Storage {
        context: &'static str,
        details: String,
    },
}

impl ApiError {
    pub fn storage(context: &'static str, err: sqlx::Error) -> Self {
        tracing::error!("{}, error: {:?}", context, err);
        Self::Storage {
            context,
            details: err.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Collaborator(_) | Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::MissingParameter(_) => json!({ "error": self.to_string() }),
            Self::Collaborator(err) => json!({
                "error": "Failed to process message",
                "details": err.to_string(),
            }),
            Self::Storage { context, details } => json!({
                "error": context,
                "details": details,
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
