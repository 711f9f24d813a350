//! Error types for the REST transport

use thiserror::Error;

/// Errors that can occur while talking to a Jellyfin server
#[derive(Debug, Error)]
pub enum RestError {
    /// Network or connection-level error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Non-success HTTP status returned by the server
    ///
    /// Carries the status code, the response headers, and the raw body
    /// text so callers can inspect whatever the server sent back.
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        headers: Vec<(String, String)>,
        body: String,
    },

    /// Response body could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid or missing client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RestError {
    /// Status code of the server response, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Look up a response header by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        match self {
            RestError::Http { headers, .. } => headers
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}
