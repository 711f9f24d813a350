//! Device registry operations

use rest_client::{Query, RestClient};
use uuid::Uuid;

use crate::apis::require_text;
use crate::error::Result;
use crate::model::{DeviceInfo, DeviceInfoQueryResult, DeviceOptions, DeviceOptionsDto};

/// Client for the `/Devices` resource group
#[derive(Debug, Clone)]
pub struct DevicesApi {
    client: RestClient,
}

impl DevicesApi {
    /// Create a facade sharing the given transport
    pub fn new(client: &RestClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// List devices known to the server
    ///
    /// Both filters are optional: `supports_sync` restricts to devices
    /// reporting sync support, `user_id` to devices a user has signed
    /// in from.
    pub fn get_devices(
        &self,
        supports_sync: Option<bool>,
        user_id: Option<Uuid>,
    ) -> Result<DeviceInfoQueryResult> {
        let query = Query::new()
            .opt("supportsSync", supports_sync)
            .opt("userId", user_id);
        Ok(self.client.get_json("/Devices", &query)?)
    }

    /// Get info for a single device
    pub fn get_device_info(&self, id: &str) -> Result<DeviceInfo> {
        require_text("id", id)?;
        Ok(self
            .client
            .get_json("/Devices/Info", &Query::new().pair("id", id))?)
    }

    /// Get the stored options for a device
    pub fn get_device_options(&self, id: &str) -> Result<DeviceOptions> {
        require_text("id", id)?;
        Ok(self
            .client
            .get_json("/Devices/Options", &Query::new().pair("id", id))?)
    }

    /// Update the stored options for a device
    pub fn update_device_options(&self, id: &str, options: &DeviceOptionsDto) -> Result<()> {
        require_text("id", id)?;
        self.client
            .post_empty("/Devices/Options", &Query::new().pair("id", id), Some(options))?;
        Ok(())
    }

    /// Delete a device registration
    pub fn delete_device(&self, id: &str) -> Result<()> {
        require_text("id", id)?;
        self.client
            .delete_empty("/Devices", &Query::new().pair("id", id))?;
        Ok(())
    }
}
