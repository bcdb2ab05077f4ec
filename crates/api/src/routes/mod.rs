pub mod health;
pub mod playlist;
pub mod search;
pub mod track;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tracks                     list, create
/// /tracks/{id}                get, update, delete
///
/// /playlists                  list, create
/// /playlists/{id}             get, update, delete
/// /playlists/{id}/tracks      add or remove a track id (POST)
/// /playlists/{id}/m3u         M3U export (GET)
///
/// /search?query=              search tracks and playlists
///
/// /uploads                    multipart upload (POST)
/// /uploads/{filename}         serve an uploaded file (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tracks", track::router())
        .nest("/playlists", playlist::router())
        .nest("/search", search::router())
        .nest("/uploads", upload::router())
}
