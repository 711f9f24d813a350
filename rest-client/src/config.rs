//! Client configuration for the REST transport

use std::fmt;
use std::time::Duration;

use crate::error::RestError;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default read timeout in seconds
const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("jellyfin-sdk/", env!("CARGO_PKG_VERSION"));

/// Configuration shared by every request the transport sends
///
/// Holds the server base URL, the optional access token, timeouts, and
/// any extra default headers. Immutable once handed to a client.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) access_token: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) connect_timeout: Duration,
    pub(crate) read_timeout: Duration,
    pub(crate) extra_headers: Vec<(String, String)>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("user_agent", &self.user_agent)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration pointing at a server base URL
    ///
    /// A trailing slash on the base URL is stripped so request paths can
    /// always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            access_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            extra_headers: Vec::new(),
        }
    }

    /// Build a configuration from the environment
    ///
    /// Reads `JELLYFIN_BASE_URL` (required) and `JELLYFIN_API_KEY`
    /// (optional).
    pub fn from_env() -> Result<Self, RestError> {
        let base_url = std::env::var("JELLYFIN_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RestError::Config("JELLYFIN_BASE_URL is not set".to_string()))?;
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var("JELLYFIN_API_KEY") {
            if !token.is_empty() {
                config = config.access_token(token);
            }
        }
        Ok(config)
    }

    /// Set the access token sent as `X-Emby-Token` on every request
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Override the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://media.local:8096/");
        assert_eq!(config.base_url, "http://media.local:8096");
    }

    #[test]
    fn test_debug_redacts_access_token() {
        let config = ClientConfig::new("http://media.local:8096").access_token("secret-token");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_default_timeouts() {
        let config = ClientConfig::new("http://media.local:8096");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_extra_headers_accumulate() {
        let config = ClientConfig::new("http://media.local:8096")
            .header("X-Application", "test")
            .header("X-Other", "value");
        assert_eq!(config.extra_headers.len(), 2);
    }
}
