//! Track entity model and DTOs.

use muslib_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A document from the `track` collection.
///
/// `delete_at` is `None` for live tracks and is omitted from JSON output.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    #[sqlx(rename = "_id")]
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub create_at: Timestamp,
    pub update_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_at: Option<Timestamp>,
    pub name: String,
    pub title: String,
    pub artist_id: String,
    pub album: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub release_date: i64,
    pub duration: i64,
    pub file_url: String,
}

impl Track {
    /// Merge a partial update into this track. Only supplied fields change.
    pub fn apply_update(&mut self, patch: UpdateTrack) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(artist_id) = patch.artist_id {
            self.artist_id = artist_id;
        }
        if let Some(album) = patch.album {
            self.album = album;
        }
        if let Some(genre) = patch.genre {
            self.genre = Some(genre);
        }
        if let Some(file_url) = patch.file_url {
            self.file_url = file_url;
        }
    }
}

/// DTO for creating a new track.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrack {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub artist_id: String,
    #[validate(length(min = 1))]
    pub album: String,
    #[validate(length(min = 1))]
    pub genre: Option<String>,
    /// Release time as a Unix timestamp.
    #[validate(range(min = 1))]
    pub release_date: i64,
    #[validate(range(min = 1))]
    pub duration: i64,
    #[validate(length(min = 1))]
    pub file_url: String,
}

/// DTO for updating a track. Release date and duration are immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrack {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub artist_id: Option<String>,
    #[validate(length(min = 1))]
    pub album: Option<String>,
    #[validate(length(min = 1))]
    pub genre: Option<String>,
    #[validate(length(min = 1))]
    pub file_url: Option<String>,
}
