//! Error types for gripwire.

use thiserror::Error;

/// Main error type for all gripwire operations.
#[derive(Debug, Error)]
pub enum GripError {
    /// Two formats with the same name were bundled into one item.
    #[error("duplicate format '{0}' in item")]
    DuplicateFormat(String),

    /// Malformed wire data or an input outside the accepted shapes.
    #[error("format error: {0}")]
    Format(String),

    /// The publish endpoint answered with a non-2xx status.
    #[error("publish failed with status {status}: {body}")]
    Publish {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Network-level failure (DNS, TLS, connect, read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JWT signing error while generating an auth header.
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The GRIP connection URI could not be parsed.
    #[error("invalid URI: {0}")]
    Uri(#[from] url::ParseError),
}

/// Result type alias using GripError.
pub type Result<T> = std::result::Result<T, GripError>;
