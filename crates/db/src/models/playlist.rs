//! Playlist entity model and DTOs.

use muslib_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A document from the `playlist` collection.
///
/// `track_ids` are weak references: they may point at tracks that were
/// soft-deleted or never existed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    #[sqlx(rename = "_id")]
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub create_at: Timestamp,
    pub update_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_at: Option<Timestamp>,
    pub title: String,
    pub album_cover: Option<String>,
    pub track_ids: Vec<String>,
}

impl Playlist {
    /// Merge a partial update into this playlist. The track list is left
    /// untouched; membership is edited through `TrackListChange`.
    pub fn apply_update(&mut self, patch: UpdatePlaylist) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(album_cover) = patch.album_cover {
            self.album_cover = Some(album_cover);
        }
    }
}

/// DTO for creating a new playlist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlaylist {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub album_cover: String,
    #[serde(default)]
    pub track_ids: Vec<String>,
}

/// DTO for updating playlist metadata.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlaylist {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub album_cover: Option<String>,
}

/// DTO for adding (`is_delete = false`) or removing a track reference.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePlaylistTrack {
    #[serde(rename = "id")]
    #[validate(length(min = 1))]
    pub track_id: String,
    pub is_delete: bool,
}
