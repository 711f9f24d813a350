//! Instant mix operations
//!
//! An instant mix is a server-built playlist of items similar to a
//! seed item: an album, artist, genre, playlist, or single song.

use rest_client::{encode_segment, Query, RestClient};
use uuid::Uuid;

use crate::apis::require_text;
use crate::error::Result;
use crate::model::{BaseItemDtoQueryResult, ImageType, ItemFields};

/// Optional tuning parameters shared by every instant mix operation
///
/// All fields default to "let the server decide":
///
/// ```
/// use jellyfin_api::InstantMixQuery;
/// use jellyfin_api::model::ItemFields;
///
/// let query = InstantMixQuery {
///     limit: Some(50),
///     fields: vec![ItemFields::Genres, ItemFields::Overview],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstantMixQuery {
    /// Attribute results to this user, filling in per-user data
    pub user_id: Option<Uuid>,
    /// Maximum number of items in the mix
    pub limit: Option<i32>,
    /// Extra item fields the server should fill in
    pub fields: Vec<ItemFields>,
    /// Include image information in the results
    pub enable_images: Option<bool>,
    /// Include per-user playback data in the results
    pub enable_user_data: Option<bool>,
    /// Maximum number of image tags per image type
    pub image_type_limit: Option<i32>,
    /// Image types to include in the results
    pub enable_image_types: Vec<ImageType>,
}

impl InstantMixQuery {
    /// Append the tuning parameters to a base query
    fn apply(&self, query: Query) -> Query {
        query
            .opt("userId", self.user_id)
            .opt("limit", self.limit)
            .multi("fields", &self.fields)
            .opt("enableImages", self.enable_images)
            .opt("enableUserData", self.enable_user_data)
            .opt("imageTypeLimit", self.image_type_limit)
            .multi("enableImageTypes", &self.enable_image_types)
    }
}

/// Client for the instant mix endpoints
#[derive(Debug, Clone)]
pub struct InstantMixApi {
    client: RestClient,
}

impl InstantMixApi {
    /// Create a facade sharing the given transport
    pub fn new(client: &RestClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Build a mix seeded from an album
    pub fn from_album(&self, id: Uuid, query: &InstantMixQuery) -> Result<BaseItemDtoQueryResult> {
        self.mix_for(&format!("/Albums/{}/InstantMix", id), query)
    }

    /// Build a mix seeded from an artist
    pub fn from_artist(&self, id: Uuid, query: &InstantMixQuery) -> Result<BaseItemDtoQueryResult> {
        self.mix_for(&format!("/Artists/{}/InstantMix", id), query)
    }

    /// Build a mix seeded from an arbitrary library item
    pub fn from_item(&self, id: Uuid, query: &InstantMixQuery) -> Result<BaseItemDtoQueryResult> {
        self.mix_for(&format!("/Items/{}/InstantMix", id), query)
    }

    /// Build a mix seeded from a music genre by id
    pub fn from_music_genre(
        &self,
        id: Uuid,
        query: &InstantMixQuery,
    ) -> Result<BaseItemDtoQueryResult> {
        let full = query.apply(Query::new().pair("id", id));
        Ok(self.client.get_json("/MusicGenres/InstantMix", &full)?)
    }

    /// Build a mix seeded from a music genre by name
    pub fn from_music_genre_name(
        &self,
        name: &str,
        query: &InstantMixQuery,
    ) -> Result<BaseItemDtoQueryResult> {
        require_text("name", name)?;
        self.mix_for(
            &format!("/MusicGenres/{}/InstantMix", encode_segment(name)),
            query,
        )
    }

    /// Build a mix seeded from a playlist
    pub fn from_playlist(
        &self,
        id: Uuid,
        query: &InstantMixQuery,
    ) -> Result<BaseItemDtoQueryResult> {
        self.mix_for(&format!("/Playlists/{}/InstantMix", id), query)
    }

    /// Build a mix seeded from a song
    pub fn from_song(&self, id: Uuid, query: &InstantMixQuery) -> Result<BaseItemDtoQueryResult> {
        self.mix_for(&format!("/Songs/{}/InstantMix", id), query)
    }

    fn mix_for(&self, path: &str, query: &InstantMixQuery) -> Result<BaseItemDtoQueryResult> {
        Ok(self.client.get_json(path, &query.apply(Query::new()))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_marshals_to_nothing() {
        let query = InstantMixQuery::default().apply(Query::new());
        assert!(query.is_empty());
    }

    #[test]
    fn test_query_marshals_all_parameters() {
        let query = InstantMixQuery {
            user_id: Some(Uuid::nil()),
            limit: Some(25),
            fields: vec![ItemFields::Genres, ItemFields::Overview],
            enable_images: Some(true),
            enable_user_data: Some(false),
            image_type_limit: Some(1),
            enable_image_types: vec![ImageType::Primary, ImageType::Backdrop],
        }
        .apply(Query::new());

        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("userId", "00000000-0000-0000-0000-000000000000"),
                ("limit", "25"),
                ("fields", "Genres"),
                ("fields", "Overview"),
                ("enableImages", "true"),
                ("enableUserData", "false"),
                ("imageTypeLimit", "1"),
                ("enableImageTypes", "Primary"),
                ("enableImageTypes", "Backdrop"),
            ]
        );
    }
}
