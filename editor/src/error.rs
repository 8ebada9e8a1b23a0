//! Error types for server calls and editor operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// `success: false` or a non-2xx status; the message is shown verbatim.
    #[error("{message}")]
    Server { message: String },
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server { message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("No document is open")]
    NoSession,
    #[error("Please select a text box first")]
    NoSelection,
    #[error("Text box {0} not found on the current page")]
    BlockNotFound(String),
    #[error("Text must not be empty")]
    EmptyText,
}
