//! Synchronized playback operations
//!
//! Sync play keeps a group of clients at the same playback position.
//! Clients create or join a group, then report buffering/ready state
//! and issue shared transport commands; the server relays them to the
//! whole group.

use rest_client::{Query, RestClient};

use crate::apis::NO_BODY;
use crate::error::Result;
use crate::model::{
    BufferRequestDto, GroupInfoDto, IgnoreWaitRequestDto, JoinGroupRequestDto,
    MovePlaylistItemRequestDto, NewGroupRequestDto, NextItemRequestDto, PingRequestDto,
    PlayRequestDto, PreviousItemRequestDto, QueueRequestDto, ReadyRequestDto,
    RemoveFromPlaylistRequestDto, SeekRequestDto, SetPlaylistItemRequestDto,
    SetRepeatModeRequestDto, SetShuffleModeRequestDto,
};

/// Client for the `/SyncPlay` resource group
#[derive(Debug, Clone)]
pub struct SyncPlayApi {
    client: RestClient,
}

impl SyncPlayApi {
    /// Create a facade sharing the given transport
    pub fn new(client: &RestClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// List groups the current user may join
    pub fn get_groups(&self) -> Result<Vec<GroupInfoDto>> {
        Ok(self.client.get_json("/SyncPlay/List", &Query::new())?)
    }

    /// Create a new group with the current client as first member
    pub fn create_group(&self, request: &NewGroupRequestDto) -> Result<()> {
        self.post("/SyncPlay/New", Some(request))
    }

    /// Join an existing group
    pub fn join_group(&self, request: &JoinGroupRequestDto) -> Result<()> {
        self.post("/SyncPlay/Join", Some(request))
    }

    /// Leave the joined group
    pub fn leave_group(&self) -> Result<()> {
        self.post("/SyncPlay/Leave", NO_BODY)
    }

    /// Report that this client started buffering
    pub fn buffering(&self, request: &BufferRequestDto) -> Result<()> {
        self.post("/SyncPlay/Buffering", Some(request))
    }

    /// Report that this client finished buffering
    pub fn ready(&self, request: &ReadyRequestDto) -> Result<()> {
        self.post("/SyncPlay/Ready", Some(request))
    }

    /// Report this client's measured latency
    pub fn ping(&self, request: &PingRequestDto) -> Result<()> {
        self.post("/SyncPlay/Ping", Some(request))
    }

    /// Request group-wide pause
    pub fn pause(&self) -> Result<()> {
        self.post("/SyncPlay/Pause", NO_BODY)
    }

    /// Request group-wide resume
    pub fn unpause(&self) -> Result<()> {
        self.post("/SyncPlay/Unpause", NO_BODY)
    }

    /// Request group-wide playback stop
    pub fn stop(&self) -> Result<()> {
        self.post("/SyncPlay/Stop", NO_BODY)
    }

    /// Request a group-wide seek
    pub fn seek(&self, request: &SeekRequestDto) -> Result<()> {
        self.post("/SyncPlay/Seek", Some(request))
    }

    /// Advance the group to the next queue item
    pub fn next_item(&self, request: &NextItemRequestDto) -> Result<()> {
        self.post("/SyncPlay/NextItem", Some(request))
    }

    /// Return the group to the previous queue item
    pub fn previous_item(&self, request: &PreviousItemRequestDto) -> Result<()> {
        self.post("/SyncPlay/PreviousItem", Some(request))
    }

    /// Append items to the group queue
    pub fn queue(&self, request: &QueueRequestDto) -> Result<()> {
        self.post("/SyncPlay/Queue", Some(request))
    }

    /// Replace the group queue and start playing
    pub fn set_new_queue(&self, request: &PlayRequestDto) -> Result<()> {
        self.post("/SyncPlay/SetNewQueue", Some(request))
    }

    /// Jump the group to a specific queue item
    pub fn set_playlist_item(&self, request: &SetPlaylistItemRequestDto) -> Result<()> {
        self.post("/SyncPlay/SetPlaylistItem", Some(request))
    }

    /// Move an item within the group queue
    pub fn move_playlist_item(&self, request: &MovePlaylistItemRequestDto) -> Result<()> {
        self.post("/SyncPlay/MovePlaylistItem", Some(request))
    }

    /// Remove items from the group queue
    pub fn remove_from_playlist(&self, request: &RemoveFromPlaylistRequestDto) -> Result<()> {
        self.post("/SyncPlay/RemoveFromPlaylist", Some(request))
    }

    /// Set the group repeat mode
    pub fn set_repeat_mode(&self, request: &SetRepeatModeRequestDto) -> Result<()> {
        self.post("/SyncPlay/SetRepeatMode", Some(request))
    }

    /// Set the group shuffle mode
    pub fn set_shuffle_mode(&self, request: &SetShuffleModeRequestDto) -> Result<()> {
        self.post("/SyncPlay/SetShuffleMode", Some(request))
    }

    /// Opt this client out of group waits
    ///
    /// A client that ignores waits no longer blocks the group while it
    /// buffers.
    pub fn set_ignore_wait(&self, request: &IgnoreWaitRequestDto) -> Result<()> {
        self.post("/SyncPlay/SetIgnoreWait", Some(request))
    }

    fn post<B: serde::Serialize>(&self, path: &str, body: Option<&B>) -> Result<()> {
        self.client.post_empty(path, &Query::new(), body)?;
        Ok(())
    }
}
