//! Handlers for the `/playlists` resource, including track-list edits and
//! M3U export.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use muslib_core::m3u::{self, M3U_CONTENT_TYPE};
use muslib_core::playlist::{apply_track_change, TrackListChange};
use muslib_core::types::parse_entity_id;
use muslib_db::export::ResolvedTrack;
use muslib_db::models::playlist::{CreatePlaylist, Playlist, UpdatePlaylist, UpdatePlaylistTrack};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/playlists
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlaylist>,
) -> AppResult<(StatusCode, Json<DataResponse<Playlist>>)> {
    input.validate()?;
    let playlist = state
        .repos
        .playlists
        .create(&input, state.deadline())
        .await?;
    tracing::info!(playlist_id = %playlist.id, "Playlist created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: playlist })))
}

/// GET /api/v1/playlists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Playlist>>>> {
    let playlists = state.repos.playlists.find_many(state.deadline()).await?;
    Ok(Json(DataResponse { data: playlists }))
}

/// GET /api/v1/playlists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Playlist>>> {
    let id = parse_entity_id(&id)?;
    let playlist = state.repos.playlists.find_by_id(id, state.deadline()).await?;
    Ok(Json(DataResponse { data: playlist }))
}

/// PUT /api/v1/playlists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePlaylist>,
) -> AppResult<Json<DataResponse<Playlist>>> {
    let id = parse_entity_id(&id)?;
    input.validate()?;

    let deadline = state.deadline();
    let mut playlist = state.repos.playlists.find_by_id(id, deadline).await?;
    playlist.apply_update(input);
    let playlist = state.repos.playlists.update(&playlist, deadline).await?;
    Ok(Json(DataResponse { data: playlist }))
}

/// DELETE /api/v1/playlists/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = parse_entity_id(&id)?;
    state.repos.playlists.delete(id, state.deadline()).await?;
    tracing::info!(playlist_id = %id, "Playlist deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/playlists/{id}/tracks
///
/// Appends the track id, or removes its first occurrence when `is_delete` is
/// set. The referenced track is not required to exist.
pub async fn update_tracks(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePlaylistTrack>,
) -> AppResult<Json<DataResponse<Playlist>>> {
    let id = parse_entity_id(&id)?;
    input.validate()?;

    let deadline = state.deadline();
    let mut playlist = state.repos.playlists.find_by_id(id, deadline).await?;
    let change = TrackListChange::from_flag(input.track_id, input.is_delete);
    if !apply_track_change(&mut playlist.track_ids, change) {
        tracing::debug!(playlist_id = %id, "Track id to remove was not in playlist");
    }
    let playlist = state.repos.playlists.update(&playlist, deadline).await?;
    Ok(Json(DataResponse { data: playlist }))
}

/// GET /api/v1/playlists/{id}/m3u
///
/// Tracks that cannot be resolved are left out of the document.
pub async fn export_m3u(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_entity_id(&id)?;

    let deadline = state.deadline();
    let playlist = state.repos.playlists.find_by_id(id, deadline).await?;
    let resolved = state
        .repos
        .resolve_playlist_tracks(&playlist, deadline)
        .await?;

    let body = m3u::render(
        resolved
            .iter()
            .filter_map(ResolvedTrack::track)
            .map(|track| track.file_url.as_str()),
    );

    Ok((
        [
            (header::CONTENT_TYPE, M3U_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                m3u::attachment_header(&playlist.id.to_string()),
            ),
        ],
        body,
    ))
}
