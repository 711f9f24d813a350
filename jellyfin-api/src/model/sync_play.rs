//! Synchronized playback group types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Playback state of a sync play group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupStateType {
    Idle,
    Waiting,
    Paused,
    Playing,
}

/// A joinable sync play group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupInfoDto {
    pub group_id: Uuid,
    pub group_name: String,
    pub state: GroupStateType,
    pub participants: Vec<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

/// How queued items are appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupQueueMode {
    Queue,
    QueueNext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupRepeatMode {
    RepeatOne,
    RepeatAll,
    RepeatNone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupShuffleMode {
    Sorted,
    Shuffle,
}

/// Body for creating a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewGroupRequestDto {
    pub group_name: String,
}

/// Body for joining a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JoinGroupRequestDto {
    pub group_id: Uuid,
}

/// Reported when a client starts buffering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BufferRequestDto {
    /// Client-side instant the state was sampled at
    pub when: DateTime<Utc>,
    pub position_ticks: i64,
    pub is_playing: bool,
    pub playlist_item_id: Uuid,
}

/// Reported when a client finished buffering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReadyRequestDto {
    pub when: DateTime<Utc>,
    pub position_ticks: i64,
    pub is_playing: bool,
    pub playlist_item_id: Uuid,
}

/// Measured connection latency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PingRequestDto {
    pub ping: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NextItemRequestDto {
    pub playlist_item_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PreviousItemRequestDto {
    pub playlist_item_id: Uuid,
}

/// Body for appending items to the group queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueRequestDto {
    pub item_ids: Vec<Uuid>,
    pub mode: GroupQueueMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveFromPlaylistRequestDto {
    pub playlist_item_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeekRequestDto {
    pub position_ticks: i64,
}

/// Body for opting a client out of group waits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IgnoreWaitRequestDto {
    pub ignore_wait: bool,
}

/// Body for replacing the group queue and starting playback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayRequestDto {
    pub playing_queue: Vec<Uuid>,
    pub playing_item_position: i32,
    pub start_position_ticks: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetPlaylistItemRequestDto {
    pub playlist_item_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovePlaylistItemRequestDto {
    pub playlist_item_id: Uuid,
    pub new_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetRepeatModeRequestDto {
    pub mode: GroupRepeatMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetShuffleModeRequestDto {
    pub mode: GroupShuffleMode,
}
