//! API Error Types
//!
//! Every failure talking to the REST API is a network failure from the
//! caller's point of view. Remote validation is only visible as a
//! non-2xx status with whatever body the server sent.

use thiserror::Error;

/// REST client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request could not be completed (connection refused, DNS, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Request rejected with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configured base URL or derived path is not a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether the remote API received and refused the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// HTTP status code, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
