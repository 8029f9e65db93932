//! Error types for gateway operations

use crate::types::{Processor, TransactionType};
use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur while building, sending or decoding a transaction
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Required request fields are missing or empty
    #[error("Can't submit to gateway - missing these input fields: {}", .fields.join(", "))]
    Validation {
        /// Offending wire field names, in the order they were checked
        fields: Vec<String>,
    },

    /// A second action call was made on a request
    #[error("Transaction type already set to {current}, cannot switch to {requested}")]
    ActionAlreadySet {
        /// Action chosen by the first call
        current: TransactionType,
        /// Action the rejected call asked for
        requested: TransactionType,
    },

    /// The processor answered with something outside its response grammar
    #[error("There was an error returned from {processor}: {message}")]
    Decode {
        /// Processor whose decoder rejected the payload
        processor: Processor,
        /// What went wrong
        message: String,
    },

    /// The transport could not complete the exchange
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTP client failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The processor adapter does not implement the capability
    #[error("{operation} is not implemented for {processor}")]
    Unsupported {
        /// Processor whose adapter is incomplete
        processor: Processor,
        /// Capability that was requested
        operation: &'static str,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// Create a validation error for the given fields
    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a decode error
    pub fn decode(processor: Processor, message: impl Into<String>) -> Self {
        Self::Decode {
            processor,
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create an unsupported-operation error
    pub fn unsupported(processor: Processor, operation: &'static str) -> Self {
        Self::Unsupported {
            processor,
            operation,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error came from the network rather than from the request or response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Http(_))
    }

    /// The core never retries; every failure is surfaced to the caller as-is.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
