//! User, session, and authentication types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BaseItemDto;

/// A server user account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserDto {
    pub name: Option<String>,
    pub server_id: Option<String>,
    pub server_name: Option<String>,
    pub id: Uuid,
    pub primary_image_tag: Option<String>,
    pub has_password: bool,
    pub has_configured_password: bool,
    pub has_configured_easy_password: bool,
    pub enable_auto_login: Option<bool>,
    pub last_login_date: Option<DateTime<Utc>>,
    pub last_activity_date: Option<DateTime<Utc>>,
    pub configuration: Option<UserConfiguration>,
    pub policy: Option<UserPolicy>,
    pub primary_image_aspect_ratio: Option<f64>,
}

/// Subtitle display preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubtitlePlaybackMode {
    #[default]
    Default,
    Always,
    OnlyForced,
    None,
    Smart,
}

/// Per-user display and playback preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserConfiguration {
    pub audio_language_preference: Option<String>,
    pub play_default_audio_track: bool,
    pub subtitle_language_preference: Option<String>,
    pub display_missing_episodes: bool,
    pub grouped_folders: Vec<String>,
    pub subtitle_mode: SubtitlePlaybackMode,
    pub display_collections_view: bool,
    pub enable_local_password: bool,
    pub ordered_views: Vec<String>,
    pub latest_items_excludes: Vec<String>,
    pub my_media_excludes: Vec<String>,
    pub hide_played_in_latest: bool,
    pub remember_audio_selections: bool,
    pub remember_subtitle_selections: bool,
    pub enable_next_episode_auto_play: bool,
}

/// What a user may do in sync play groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncPlayUserAccessType {
    #[default]
    CreateAndJoinGroups,
    JoinGroups,
    None,
}

/// Administrative policy attached to a user account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserPolicy {
    pub is_administrator: bool,
    pub is_hidden: bool,
    pub is_disabled: bool,
    pub max_parental_rating: Option<i32>,
    pub blocked_tags: Vec<String>,
    pub enable_user_preference_access: bool,
    pub enable_remote_control_of_other_users: bool,
    pub enable_shared_device_control: bool,
    pub enable_remote_access: bool,
    pub enable_live_tv_management: bool,
    pub enable_live_tv_access: bool,
    pub enable_media_playback: bool,
    pub enable_audio_playback_transcoding: bool,
    pub enable_video_playback_transcoding: bool,
    pub enable_playback_remuxing: bool,
    pub force_remote_source_transcoding: bool,
    pub enable_content_deletion: bool,
    pub enable_content_deletion_from_folders: Vec<String>,
    pub enable_content_downloading: bool,
    pub enable_sync_transcoding: bool,
    pub enable_media_conversion: bool,
    pub enabled_devices: Vec<String>,
    pub enable_all_devices: bool,
    pub enabled_channels: Vec<Uuid>,
    pub enable_all_channels: bool,
    pub enabled_folders: Vec<Uuid>,
    pub enable_all_folders: bool,
    pub invalid_login_attempt_count: i32,
    pub login_attempts_before_lockout: i32,
    pub enable_public_sharing: bool,
    pub blocked_media_folders: Vec<Uuid>,
    pub blocked_channels: Vec<Uuid>,
    pub remote_client_bitrate_limit: i32,
    pub authentication_provider_id: Option<String>,
    pub password_reset_provider_id: Option<String>,
    pub sync_play_access: SyncPlayUserAccessType,
}

/// An active session on the server
///
/// Trimmed to the fields the authentication flow returns; the full
/// session schema also carries live playback detail this surface never
/// consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SessionInfo {
    pub id: Option<String>,
    pub user_id: Option<Uuid>,
    pub user_name: Option<String>,
    pub client: Option<String>,
    pub device_name: Option<String>,
    pub device_id: Option<String>,
    pub application_version: Option<String>,
    pub remote_end_point: Option<String>,
    pub last_activity_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub supports_media_control: bool,
    pub supports_remote_control: bool,
    pub playable_media_types: Vec<String>,
    pub supported_commands: Vec<String>,
    pub now_playing_item: Option<BaseItemDto>,
    pub playlist_item_id: Option<String>,
    pub server_id: Option<String>,
}

/// Successful authentication response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthenticationResult {
    pub user: Option<UserDto>,
    pub session_info: Option<SessionInfo>,
    pub access_token: Option<String>,
    pub server_id: Option<String>,
}

/// Body for authenticating with username and password
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthenticateUserByName {
    pub username: Option<String>,
    pub pw: Option<String>,
}

impl AuthenticateUserByName {
    pub fn new(username: impl Into<String>, pw: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            pw: Some(pw.into()),
        }
    }
}

/// Body for redeeming a quick connect secret into a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QuickConnectDto {
    pub secret: String,
}

/// Body for creating a user account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateUserByName {
    pub name: String,
    pub password: Option<String>,
}

/// Body for starting a password reset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ForgotPasswordDto {
    pub entered_username: String,
}

/// How a password reset proceeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForgotPasswordAction {
    #[default]
    ContactAdmin,
    PinCode,
    InNetworkRequired,
}

/// Response to a password reset request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ForgotPasswordResult {
    pub action: ForgotPasswordAction,
    pub pin_file: Option<String>,
    pub pin_expiration_date: Option<DateTime<Utc>>,
}

/// Body for redeeming a password reset pin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ForgotPasswordPinDto {
    pub pin: String,
}

/// Response to a pin redemption
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PinRedeemResult {
    pub success: bool,
    pub users_reset: Vec<String>,
}

/// Body for changing a user's password
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateUserPassword {
    pub current_password: Option<String>,
    pub current_pw: Option<String>,
    pub new_pw: Option<String>,
    pub reset_password: bool,
}

/// Body for changing a user's easy (in-network) password
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateUserEasyPassword {
    pub new_password: Option<String>,
    pub new_pw: Option<String>,
    pub reset_password: bool,
}
