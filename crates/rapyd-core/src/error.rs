//! # Rapyd Error Types
//!
//! Typed error handling for the Rapyd client.
//! All operations return `Result<T, RapydError>`.

use thiserror::Error;

/// Core error type for all Rapyd operations
#[derive(Debug, Error)]
pub enum RapydError {
    /// Configuration errors (missing keys, invalid mode)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Endpoint parameters could not be turned into a request path
    #[error("Invalid endpoint parameters: {0}")]
    InvalidParams(String),

    /// A value could not be represented in the wire format
    #[error("Encoding error: {0}")]
    Encode(String),

    /// A response body did not match the expected shape or vocabulary
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Network/HTTP error from the transport
    #[error("Network error: {0}")]
    Network(String),

    /// A syntactically valid response whose status envelope reported failure.
    /// The fields are surfaced verbatim; this crate never interprets them.
    #[error("Rapyd API error [{error_code}]: {message}")]
    Api {
        error_code: String,
        message: String,
        response_code: Option<String>,
        operation_id: Option<String>,
    },
}

impl RapydError {
    /// Returns true if this error is retryable (by a caller; this crate never retries)
    pub fn is_retryable(&self) -> bool {
        matches!(self, RapydError::Network(_))
    }
}

/// Result type alias for Rapyd operations
pub type RapydResult<T> = Result<T, RapydError>;
