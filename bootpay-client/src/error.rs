//! Error types for the Bootpay client.

/// Errors returned by gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected HTTP status from {endpoint}: expected 200, got {status}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    #[error("Token request rejected: expected status 200, got {status} (code {code}): {message}")]
    Auth {
        status: i64,
        code: i64,
        message: String,
    },

    #[error("Request to {endpoint} rejected: status {status} (code {code}): {message}")]
    Rejected {
        endpoint: String,
        status: i64,
        code: i64,
        message: String,
    },

    #[error("Unexpected receipt status: expected {expected}, got {actual}")]
    UnexpectedStatus { expected: i64, actual: i64 },

    #[error("Unexpected price: expected {expected}, got {actual}")]
    PriceMismatch { expected: i64, actual: i64 },
}

impl Error {
    /// HTTP status observed on the wire, if the gateway answered with a non-200.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport { source, .. } if source.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
