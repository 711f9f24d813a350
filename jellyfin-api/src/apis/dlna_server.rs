//! DLNA server document operations
//!
//! These endpoints serve the UPnP description documents and icons the
//! server's DLNA profile exposes. Documents come back as raw XML text,
//! icons as raw bytes; callers decide what to do with them.

use rest_client::{encode_segment, Query, RestClient, ACCEPT_XML};

use crate::apis::require_text;
use crate::error::Result;

/// Accept header for icon downloads
const ACCEPT_IMAGE: &str = "image/*";

/// Client for the `/Dlna/{serverId}` resource group
#[derive(Debug, Clone)]
pub struct DlnaServerApi {
    client: RestClient,
}

impl DlnaServerApi {
    /// Create a facade sharing the given transport
    pub fn new(client: &RestClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Get the root device description document
    pub fn get_description_xml(&self, server_id: &str) -> Result<String> {
        let path = self.document_path(server_id, "description")?;
        Ok(self.client.get_text(&path, &Query::new(), ACCEPT_XML)?)
    }

    /// Get the ContentDirectory service description
    pub fn get_content_directory(&self, server_id: &str) -> Result<String> {
        let path = self.document_path(server_id, "ContentDirectory")?;
        Ok(self.client.get_text(&path, &Query::new(), ACCEPT_XML)?)
    }

    /// Get the ConnectionManager service description
    pub fn get_connection_manager(&self, server_id: &str) -> Result<String> {
        let path = self.document_path(server_id, "ConnectionManager")?;
        Ok(self.client.get_text(&path, &Query::new(), ACCEPT_XML)?)
    }

    /// Get the MediaReceiverRegistrar service description
    pub fn get_media_receiver_registrar(&self, server_id: &str) -> Result<String> {
        let path = self.document_path(server_id, "MediaReceiverRegistrar")?;
        Ok(self.client.get_text(&path, &Query::new(), ACCEPT_XML)?)
    }

    /// Download a server-wide DLNA icon
    pub fn get_icon(&self, file_name: &str) -> Result<Vec<u8>> {
        require_text("fileName", file_name)?;
        let path = format!("/Dlna/icons/{}", encode_segment(file_name));
        Ok(self.client.get_bytes(&path, &Query::new(), ACCEPT_IMAGE)?)
    }

    /// Download a DLNA icon scoped to a server profile
    pub fn get_icon_id(&self, server_id: &str, file_name: &str) -> Result<Vec<u8>> {
        require_text("serverId", server_id)?;
        require_text("fileName", file_name)?;
        let path = format!(
            "/Dlna/{}/icons/{}",
            encode_segment(server_id),
            encode_segment(file_name)
        );
        Ok(self.client.get_bytes(&path, &Query::new(), ACCEPT_IMAGE)?)
    }

    /// Submit a ConnectionManager SOAP control request
    pub fn process_connection_manager_control_request(&self, server_id: &str) -> Result<String> {
        let path = self.control_path(server_id, "ConnectionManager")?;
        Ok(self.client.post_text(&path, &Query::new(), ACCEPT_XML)?)
    }

    /// Submit a ContentDirectory SOAP control request
    pub fn process_content_directory_control_request(&self, server_id: &str) -> Result<String> {
        let path = self.control_path(server_id, "ContentDirectory")?;
        Ok(self.client.post_text(&path, &Query::new(), ACCEPT_XML)?)
    }

    /// Submit a MediaReceiverRegistrar SOAP control request
    pub fn process_media_receiver_registrar_control_request(
        &self,
        server_id: &str,
    ) -> Result<String> {
        let path = self.control_path(server_id, "MediaReceiverRegistrar")?;
        Ok(self.client.post_text(&path, &Query::new(), ACCEPT_XML)?)
    }

    fn document_path(&self, server_id: &str, document: &str) -> Result<String> {
        require_text("serverId", server_id)?;
        Ok(format!("/Dlna/{}/{}", encode_segment(server_id), document))
    }

    fn control_path(&self, server_id: &str, service: &str) -> Result<String> {
        require_text("serverId", server_id)?;
        Ok(format!(
            "/Dlna/{}/{}/Control",
            encode_segment(server_id),
            service
        ))
    }
}
