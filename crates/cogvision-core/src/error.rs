//! Centralized error types for CogVision.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for vision API operations.
#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Invalid file path: {}", .0.display())]
    InvalidFilePath(PathBuf),

    #[error("Invalid remote image url: {0}")]
    InvalidImageUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Vision API error (HTTP {status})")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed response from Vision API: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

/// Result type for vision API operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// Coarse classification of a [`VisionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input detected before any network call.
    Validation,
    /// Missing or unusable credentials/endpoint.
    Config,
    /// Local filesystem failure while reading an image.
    Io,
    /// DNS, connection, TLS or timeout failure.
    Transport,
    /// Upstream answered with a non-2xx status.
    UpstreamStatus,
    /// Upstream body was not valid JSON.
    UpstreamFormat,
}

impl VisionError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid remote image url error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidImageUrl(url.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFilePath(_) | Self::InvalidImageUrl(_) => ErrorKind::Validation,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
            Self::Transport(_) => ErrorKind::Transport,
            Self::UpstreamStatus { .. } => ErrorKind::UpstreamStatus,
            Self::MalformedResponse { .. } => ErrorKind::UpstreamFormat,
        }
    }

    /// True when the call was rejected before any request was sent.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Raw upstream body, when one was received.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::UpstreamStatus { body, .. } | Self::MalformedResponse { body, .. } => {
                Some(body.as_str())
            }
            _ => None,
        }
    }
}
