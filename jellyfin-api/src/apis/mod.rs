//! Resource facades for the Jellyfin HTTP API
//!
//! One module per upstream resource group. Every facade holds a clone
//! of the shared [`rest_client::RestClient`] and exposes one method per
//! API operation.

pub mod devices;
pub mod dlna_server;
pub mod instant_mix;
pub mod notifications;
pub mod quick_connect;
pub mod sync_play;
pub mod user;

use crate::error::{ApiError, Result};

/// Body placeholder for POST operations that send nothing
pub(crate) const NO_BODY: Option<&()> = None;

/// Fail fast on string parameters that would produce a malformed request
pub(crate) fn require_text(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidParameter(format!(
            "'{}' must not be blank",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_blank() {
        assert!(require_text("id", "").is_err());
        assert!(require_text("id", "   ").is_err());
    }

    #[test]
    fn test_require_text_accepts_value() {
        assert!(require_text("id", "dev-1").is_ok());
    }

    #[test]
    fn test_require_text_error_names_parameter() {
        let error = require_text("serverId", "").unwrap_err();
        assert!(format!("{}", error).contains("serverId"));
    }
}
