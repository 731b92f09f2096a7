use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failure taxonomy for the lead intake flow.
#[derive(Debug, Error)]
pub enum LeadError {
    /// Request failed validation; the message is safe to echo to the caller.
    #[error("{0}")]
    Invalid(String),

    /// The refresh-token grant failed or came back without an access token.
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    /// The Sheets append call was rejected by the provider.
    #[error("Sheets API error: {0}")]
    Append(String),

    /// Transport-level failure on an outbound call.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Required configuration missing at startup.
    #[error("{0}")]
    Config(String),
}

impl LeadError {
    pub fn status(&self) -> StatusCode {
        match self {
            LeadError::Invalid(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent back to the caller. Upstream detail stays in the logs;
    /// credentials and provider internals never reach the client.
    pub fn client_message(&self) -> &str {
        match self {
            LeadError::Invalid(message) => message,
            LeadError::Append(_) => "Failed to save lead",
            _ => "Server error",
        }
    }
}
