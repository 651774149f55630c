//! Errors raised while fetching server metadata

use thiserror::Error;

/// Connectivity and protocol failures. All of them end the run.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("[HTTP {status}] Cannot retrieve {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid url address of a server: {base_url}")]
    InvalidUrl { base_url: String },

    #[error(
        "Cannot connect to the server {base_url} ({reason}). Check that a server is running and its address is passed in --usecloud"
    )]
    Connection { base_url: String, reason: String },

    #[error("Request timeout when fetching {url}. Check your internet connection and try again.")]
    Timeout { url: String },

    #[error("Invalid JSON response from {url}")]
    InvalidJson { url: String, body: String },

    #[error("Unexpected JSON returned from {url}: {reason}")]
    UnexpectedPayload { url: String, reason: String },

    #[error("Server returned an error message for {url}: {message}")]
    Server { url: String, message: String },
}

impl MetadataError {
    pub(crate) fn unexpected(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnexpectedPayload {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
