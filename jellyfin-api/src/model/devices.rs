//! Device registry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A device known to the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeviceInfo {
    pub name: Option<String>,
    pub id: Option<String>,
    pub last_user_name: Option<String>,
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub last_user_id: Option<Uuid>,
    pub date_last_activity: Option<DateTime<Utc>>,
    pub capabilities: Option<ClientCapabilities>,
    pub icon_url: Option<String>,
}

/// Capabilities a client reported when it registered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientCapabilities {
    pub playable_media_types: Vec<String>,
    pub supported_commands: Vec<String>,
    pub supports_media_control: bool,
    pub supports_content_uploading: bool,
    pub message_callback_url: Option<String>,
    pub supports_persistent_identifier: bool,
    pub supports_sync: bool,
    pub app_store_url: Option<String>,
    pub icon_url: Option<String>,
}

/// Paged device listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeviceInfoQueryResult {
    pub items: Vec<DeviceInfo>,
    pub total_record_count: i32,
    pub start_index: i32,
}

/// Stored per-device options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeviceOptions {
    pub id: i32,
    pub device_id: Option<String>,
    pub custom_name: Option<String>,
}

/// Body for updating per-device options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeviceOptionsDto {
    pub id: Option<i32>,
    pub device_id: Option<String>,
    pub custom_name: Option<String>,
}
