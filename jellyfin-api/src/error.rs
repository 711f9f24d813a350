use rest_client::RestError;
use thiserror::Error;

/// High-level errors for Jellyfin API operations
///
/// This enum carries the transport failures surfaced by the underlying
/// REST client plus the client-side validation failures that are caught
/// before a request is ever sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status returned by the server
    ///
    /// Carries the status code, response headers, and raw body text of
    /// whatever the server sent back.
    #[error("Server returned HTTP {status}: {body}")]
    Status {
        status: u16,
        headers: Vec<(String, String)>,
        body: String,
    },

    /// Response body could not be decoded into the expected type
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid parameter value caught before sending a request
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid or missing client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Status code of the server response, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the request as unauthorized
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    /// True when the server answered with 404
    pub fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

/// Convert from RestError to ApiError
impl From<RestError> for ApiError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Network(msg) => ApiError::Network(msg),
            RestError::Http {
                status,
                headers,
                body,
            } => ApiError::Status {
                status,
                headers,
                body,
            },
            RestError::Decode(msg) => ApiError::Decode(msg),
            RestError::Config(msg) => ApiError::Config(msg),
        }
    }
}
