//! Quick connect pairing operations
//!
//! Quick connect lets a new device sign in by showing a short code that
//! an already-authenticated device approves. The initiating device
//! polls [`QuickConnectApi::connect`] with its secret until the result
//! reports `authenticated`.

use rest_client::{Query, RestClient};

use crate::apis::{require_text, NO_BODY};
use crate::error::Result;
use crate::model::{QuickConnectResult, QuickConnectState};

/// Client for the `/QuickConnect` resource group
#[derive(Debug, Clone)]
pub struct QuickConnectApi {
    client: RestClient,
}

impl QuickConnectApi {
    /// Create a facade sharing the given transport
    pub fn new(client: &RestClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Whether quick connect is currently usable on the server
    pub fn get_status(&self) -> Result<QuickConnectState> {
        Ok(self.client.get_json("/QuickConnect/Status", &Query::new())?)
    }

    /// Start a pairing attempt, returning the code to show the user
    pub fn initiate(&self) -> Result<QuickConnectResult> {
        Ok(self
            .client
            .get_json("/QuickConnect/Initiate", &Query::new())?)
    }

    /// Poll a pairing attempt by its secret
    pub fn connect(&self, secret: &str) -> Result<QuickConnectResult> {
        require_text("secret", secret)?;
        Ok(self.client.get_json(
            "/QuickConnect/Connect",
            &Query::new().pair("secret", secret),
        )?)
    }

    /// Approve a pairing code on behalf of the authenticated user
    pub fn authorize(&self, code: &str) -> Result<bool> {
        require_text("code", code)?;
        Ok(self.client.post_json(
            "/QuickConnect/Authorize",
            &Query::new().pair("code", code),
            NO_BODY,
        )?)
    }

    /// Revoke all quick connect authorizations for the current user
    ///
    /// Returns the number of revoked authorizations.
    pub fn deauthorize(&self) -> Result<i32> {
        Ok(self
            .client
            .post_json("/QuickConnect/Deauthorize", &Query::new(), NO_BODY)?)
    }

    /// Temporarily activate quick connect for a short pairing window
    pub fn activate(&self) -> Result<()> {
        self.client
            .post_empty("/QuickConnect/Activate", &Query::new(), NO_BODY)?;
        Ok(())
    }

    /// Set the availability state of quick connect
    pub fn available(&self, status: QuickConnectState) -> Result<()> {
        self.client.post_empty(
            "/QuickConnect/Available",
            &Query::new().pair("status", status),
            NO_BODY,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use rest_client::ClientConfig;

    #[test]
    fn test_blank_secret_and_code_fail_fast() {
        let api = QuickConnectApi::new(&RestClient::new(ClientConfig::new("http://127.0.0.1:1")));
        assert!(matches!(
            api.connect(""),
            Err(ApiError::InvalidParameter(_))
        ));
        assert!(matches!(
            api.authorize("  "),
            Err(ApiError::InvalidParameter(_))
        ));
    }
}
