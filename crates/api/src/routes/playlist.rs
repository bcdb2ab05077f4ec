//! Route definitions for playlists.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::playlist;
use crate::state::AppState;

/// Routes mounted at `/playlists`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// POST   /{id}/tracks   -> update_tracks
/// GET    /{id}/m3u      -> export_m3u
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(playlist::list).post(playlist::create))
        .route(
            "/{id}",
            get(playlist::get_by_id)
                .put(playlist::update)
                .delete(playlist::delete),
        )
        .route("/{id}/tracks", post(playlist::update_tracks))
        .route("/{id}/m3u", get(playlist::export_m3u))
}
