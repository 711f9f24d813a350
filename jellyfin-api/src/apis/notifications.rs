//! Notification inbox operations

use rest_client::{encode_segment, Query, RestClient};

use crate::apis::{require_text, NO_BODY};
use crate::error::Result;
use crate::model::{
    AdminNotificationDto, NameIdPair, NotificationResultDto, NotificationTypeInfo,
    NotificationsSummaryDto,
};

/// Client for the `/Notifications` resource group
#[derive(Debug, Clone)]
pub struct NotificationsApi {
    client: RestClient,
}

impl NotificationsApi {
    /// Create a facade sharing the given transport
    pub fn new(client: &RestClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Get a user's notifications
    pub fn get_notifications(&self, user_id: &str) -> Result<NotificationResultDto> {
        require_text("userId", user_id)?;
        let path = format!("/Notifications/{}", encode_segment(user_id));
        Ok(self.client.get_json(&path, &Query::new())?)
    }

    /// Get the unread summary for a user's inbox
    pub fn get_notifications_summary(&self, user_id: &str) -> Result<NotificationsSummaryDto> {
        require_text("userId", user_id)?;
        let path = format!("/Notifications/{}/Summary", encode_segment(user_id));
        Ok(self.client.get_json(&path, &Query::new())?)
    }

    /// List the notification services configured on the server
    pub fn get_notification_services(&self) -> Result<Vec<NameIdPair>> {
        Ok(self
            .client
            .get_json("/Notifications/Services", &Query::new())?)
    }

    /// List the notification types the server can emit
    pub fn get_notification_types(&self) -> Result<Vec<NotificationTypeInfo>> {
        Ok(self.client.get_json("/Notifications/Types", &Query::new())?)
    }

    /// Send a notification to all administrators
    pub fn create_admin_notification(&self, notification: &AdminNotificationDto) -> Result<()> {
        self.client
            .post_empty("/Notifications/Admin", &Query::new(), Some(notification))?;
        Ok(())
    }

    /// Mark all of a user's notifications read
    pub fn set_read(&self, user_id: &str) -> Result<()> {
        require_text("userId", user_id)?;
        let path = format!("/Notifications/{}/Read", encode_segment(user_id));
        self.client.post_empty(&path, &Query::new(), NO_BODY)?;
        Ok(())
    }

    /// Mark all of a user's notifications unread
    pub fn set_unread(&self, user_id: &str) -> Result<()> {
        require_text("userId", user_id)?;
        let path = format!("/Notifications/{}/Unread", encode_segment(user_id));
        self.client.post_empty(&path, &Query::new(), NO_BODY)?;
        Ok(())
    }
}
