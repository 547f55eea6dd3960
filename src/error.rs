//! Error types for crime-proxy

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an upstream fetch can fail.
///
/// Handlers never expose these to callers; every variant is reported as a
/// generic 500 and only shows up in the logs.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Upstream request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {status}")]
    Status { status: u16 },

    #[error("Malformed upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }

    pub fn status(status: u16) -> Self {
        Error::Status { status }
    }
}
