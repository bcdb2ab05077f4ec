//! Combined search result model.

use serde::Serialize;

use crate::models::playlist::Playlist;
use crate::models::track::Track;

/// Tracks and playlists matching a single search query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
}
