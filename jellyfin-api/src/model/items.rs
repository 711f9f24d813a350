//! Library item types shared by the instant-mix endpoints

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A library item as returned by listing endpoints
///
/// The upstream schema declares far more fields than any one endpoint
/// fills in; this carries the playback and library fields the instant
/// mix results actually populate. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BaseItemDto {
    pub name: Option<String>,
    pub original_title: Option<String>,
    pub server_id: Option<String>,
    pub id: Uuid,
    pub etag: Option<String>,
    pub playlist_item_id: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub container: Option<String>,
    pub sort_name: Option<String>,
    pub premiere_date: Option<DateTime<Utc>>,
    pub path: Option<String>,
    pub overview: Option<String>,
    pub taglines: Vec<String>,
    pub genres: Vec<String>,
    pub community_rating: Option<f32>,
    pub run_time_ticks: Option<i64>,
    pub production_year: Option<i32>,
    pub index_number: Option<i32>,
    pub parent_index_number: Option<i32>,
    pub is_folder: Option<bool>,
    pub parent_id: Option<Uuid>,
    #[serde(rename = "Type")]
    pub item_type: Option<String>,
    pub media_type: Option<String>,
    pub user_data: Option<UserItemDataDto>,
    pub artists: Vec<String>,
    pub album: Option<String>,
    pub album_id: Option<Uuid>,
    pub album_artist: Option<String>,
    pub album_primary_image_tag: Option<String>,
    pub series_name: Option<String>,
    pub series_id: Option<Uuid>,
    pub season_id: Option<Uuid>,
    pub season_name: Option<String>,
    pub channel_id: Option<Uuid>,
    pub image_tags: Option<HashMap<String, String>>,
    pub backdrop_image_tags: Vec<String>,
    pub primary_image_aspect_ratio: Option<f64>,
    pub location_type: Option<String>,
}

/// Per-user playback state attached to an item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserItemDataDto {
    pub rating: Option<f64>,
    pub played_percentage: Option<f64>,
    pub unplayed_item_count: Option<i32>,
    pub playback_position_ticks: i64,
    pub play_count: i32,
    pub is_favorite: bool,
    pub likes: Option<bool>,
    pub last_played_date: Option<DateTime<Utc>>,
    pub played: bool,
    pub key: Option<String>,
    pub item_id: Option<String>,
}

/// Paged item listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BaseItemDtoQueryResult {
    pub items: Vec<BaseItemDto>,
    pub total_record_count: i32,
    pub start_index: i32,
}

/// Optional item fields a query can ask the server to fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemFields {
    CanDelete,
    CanDownload,
    ChannelInfo,
    Chapters,
    ChildCount,
    CumulativeRunTimeTicks,
    CustomRating,
    DateCreated,
    DateLastMediaAdded,
    DisplayPreferencesId,
    Etag,
    ExternalUrls,
    Genres,
    ItemCounts,
    MediaSources,
    MediaStreams,
    Overview,
    ParentId,
    Path,
    People,
    PlayAccess,
    PrimaryImageAspectRatio,
    ProductionLocations,
    ProviderIds,
    SeriesPrimaryImage,
    SortName,
    Studios,
    Taglines,
    Tags,
}

impl ItemFields {
    /// Wire name of this field
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemFields::CanDelete => "CanDelete",
            ItemFields::CanDownload => "CanDownload",
            ItemFields::ChannelInfo => "ChannelInfo",
            ItemFields::Chapters => "Chapters",
            ItemFields::ChildCount => "ChildCount",
            ItemFields::CumulativeRunTimeTicks => "CumulativeRunTimeTicks",
            ItemFields::CustomRating => "CustomRating",
            ItemFields::DateCreated => "DateCreated",
            ItemFields::DateLastMediaAdded => "DateLastMediaAdded",
            ItemFields::DisplayPreferencesId => "DisplayPreferencesId",
            ItemFields::Etag => "Etag",
            ItemFields::ExternalUrls => "ExternalUrls",
            ItemFields::Genres => "Genres",
            ItemFields::ItemCounts => "ItemCounts",
            ItemFields::MediaSources => "MediaSources",
            ItemFields::MediaStreams => "MediaStreams",
            ItemFields::Overview => "Overview",
            ItemFields::ParentId => "ParentId",
            ItemFields::Path => "Path",
            ItemFields::People => "People",
            ItemFields::PlayAccess => "PlayAccess",
            ItemFields::PrimaryImageAspectRatio => "PrimaryImageAspectRatio",
            ItemFields::ProductionLocations => "ProductionLocations",
            ItemFields::ProviderIds => "ProviderIds",
            ItemFields::SeriesPrimaryImage => "SeriesPrimaryImage",
            ItemFields::SortName => "SortName",
            ItemFields::Studios => "Studios",
            ItemFields::Taglines => "Taglines",
            ItemFields::Tags => "Tags",
        }
    }
}

impl fmt::Display for ItemFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image kinds an item can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageType {
    Primary,
    Art,
    Backdrop,
    Banner,
    Logo,
    Thumb,
    Disc,
    Box,
    Screenshot,
    Menu,
    Chapter,
    BoxRear,
    Profile,
}

impl ImageType {
    /// Wire name of this image kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Primary => "Primary",
            ImageType::Art => "Art",
            ImageType::Backdrop => "Backdrop",
            ImageType::Banner => "Banner",
            ImageType::Logo => "Logo",
            ImageType::Thumb => "Thumb",
            ImageType::Disc => "Disc",
            ImageType::Box => "Box",
            ImageType::Screenshot => "Screenshot",
            ImageType::Menu => "Menu",
            ImageType::Chapter => "Chapter",
            ImageType::BoxRear => "BoxRear",
            ImageType::Profile => "Profile",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_result_deserializes() {
        let json = r#"{
            "Items": [
                {
                    "Name": "Paranoid Android",
                    "Id": "f0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5",
                    "Type": "Audio",
                    "RunTimeTicks": 3830000000,
                    "Artists": ["Radiohead"],
                    "Album": "OK Computer",
                    "UserData": {"PlayCount": 3, "Played": true}
                }
            ],
            "TotalRecordCount": 1,
            "StartIndex": 0
        }"#;
        let result: BaseItemDtoQueryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total_record_count, 1);
        let item = &result.items[0];
        assert_eq!(item.name.as_deref(), Some("Paranoid Android"));
        assert_eq!(item.item_type.as_deref(), Some("Audio"));
        assert_eq!(item.artists, vec!["Radiohead".to_string()]);
        assert_eq!(item.user_data.as_ref().unwrap().play_count, 3);
    }

    #[test]
    fn test_item_fields_wire_names() {
        assert_eq!(ItemFields::DateCreated.to_string(), "DateCreated");
        assert_eq!(ItemFields::PrimaryImageAspectRatio.as_str(), "PrimaryImageAspectRatio");
        let json = serde_json::to_string(&ItemFields::Genres).unwrap();
        assert_eq!(json, "\"Genres\"");
    }

    #[test]
    fn test_image_type_wire_names() {
        assert_eq!(ImageType::Backdrop.to_string(), "Backdrop");
        let parsed: ImageType = serde_json::from_str("\"Primary\"").unwrap();
        assert_eq!(parsed, ImageType::Primary);
    }
}
