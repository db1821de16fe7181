use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TorusError {
    /// Transport failure: connection, TLS or body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The remote side rejected the call. The message is the server's own text.
    #[error("{message}")]
    Api {
        status: u16,
        id: Option<String>,
        message: String,
    },

    /// The response could not be mapped onto the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid method: {0}")]
    InvalidMethod(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

impl TorusError {
    /// True when the server answered with an error envelope or a non-2xx status.
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// True for failures that happened before any response was read.
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_))
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
