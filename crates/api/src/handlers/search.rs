//! Handler for cross-collection search.

use axum::extract::{Query, State};
use axum::Json;
use muslib_db::models::search::SearchResults;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// GET /api/v1/search?query=
///
/// Tracks and playlists are searched concurrently under the same deadline.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<SearchResults>>> {
    let deadline = state.deadline();
    let (tracks, playlists) = tokio::join!(
        state.repos.tracks.search(&params.query, deadline),
        state.repos.playlists.search(&params.query, deadline),
    );

    Ok(Json(DataResponse {
        data: SearchResults {
            tracks: tracks?,
            playlists: playlists?,
        },
    }))
}
