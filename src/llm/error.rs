//! Generation error types

use thiserror::Error;

/// Failure of a single generation call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Non-success HTTP status from the completion endpoint
    #[error("Gemini API error: {status} - {body}")]
    Upstream { status: u16, body: String },
    /// Success status but the payload did not carry candidate text
    #[error("Invalid response structure from Gemini API: {0}")]
    MalformedResponse(String),
    /// The request never produced an HTTP response
    #[error("Request failed: {0}")]
    Network(String),
}

impl GenerationError {
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// HTTP status carried by an upstream failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether resubmitting the same prompt could plausibly succeed.
    /// Nothing in the crate retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Upstream { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::MalformedResponse(_) => false,
        }
    }
}
