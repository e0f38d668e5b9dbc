//! Client error types

use thiserror::Error;

/// Errors from calls against the hosting platform.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform answered with an error envelope.
    #[error("platform error {code}: {message}")]
    Api { code: String, message: String },

    /// The bearer token did not resolve to a session (401).
    #[error("session missing or expired")]
    SessionMissing,

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Api {
            code: code.into(),
            message: message.into(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
