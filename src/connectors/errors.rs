/// Errors that can occur while talking to the AI collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(String),
    /// Service unreachable or timeout
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    /// The service answered but the body was not the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The service answered with a non-success status
    #[error("AI service returned status {status}: {details}")]
    Upstream { status: u16, details: String },
    /// Internal error in the connector itself
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            Self::Http(err.to_string())
        }
    }
}
