//! Error types for API calls.

use showbuild_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The server answered but reported failure in the body.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The base URL cannot carry endpoint paths.
    #[error("invalid URL: {0}")]
    Url(String),

    /// The response body did not have the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl From<url::ParseError> for ClientError {
    fn from(e: url::ParseError) -> Self {
        ClientError::Url(e.to_string())
    }
}

/// The engine sees every client failure as a transport failure.
impl From<ClientError> for CoreError {
    fn from(e: ClientError) -> Self {
        CoreError::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
