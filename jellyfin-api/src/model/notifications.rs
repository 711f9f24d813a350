//! Notification inbox types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Normal,
    Warning,
    Error,
}

/// One notification in a user's inbox
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationDto {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub is_read: bool,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub level: Option<NotificationLevel>,
}

/// Paged notification listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationResultDto {
    pub notifications: Vec<NotificationDto>,
    pub total_record_count: i32,
}

/// Unread-count summary for a user's inbox
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationsSummaryDto {
    pub unread_count: i32,
    pub max_unread_notification_level: Option<NotificationLevel>,
}

/// A notification type the server can emit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationTypeInfo {
    #[serde(rename = "Type")]
    pub notification_type: Option<String>,
    pub name: Option<String>,
    pub enabled: bool,
    pub category: Option<String>,
    pub is_based_on_user_event: bool,
}

/// Generic name/id pair used by the services listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NameIdPair {
    pub name: Option<String>,
    pub id: Option<String>,
}

/// Body for posting an administrator notification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AdminNotificationDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub notification_level: Option<NotificationLevel>,
    pub url: Option<String>,
}
