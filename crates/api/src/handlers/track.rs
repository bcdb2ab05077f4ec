//! Handlers for the `/tracks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use muslib_core::types::parse_entity_id;
use muslib_db::models::track::{CreateTrack, Track, UpdateTrack};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tracks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrack>,
) -> AppResult<(StatusCode, Json<DataResponse<Track>>)> {
    input.validate()?;
    let track = state.repos.tracks.create(&input, state.deadline()).await?;
    tracing::info!(track_id = %track.id, "Track created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: track })))
}

/// GET /api/v1/tracks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Track>>>> {
    let tracks = state.repos.tracks.find_many(state.deadline()).await?;
    Ok(Json(DataResponse { data: tracks }))
}

/// GET /api/v1/tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Track>>> {
    let id = parse_entity_id(&id)?;
    let track = state.repos.tracks.find_by_id(id, state.deadline()).await?;
    Ok(Json(DataResponse { data: track }))
}

/// PUT /api/v1/tracks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTrack>,
) -> AppResult<Json<DataResponse<Track>>> {
    let id = parse_entity_id(&id)?;
    input.validate()?;

    let deadline = state.deadline();
    let mut track = state.repos.tracks.find_by_id(id, deadline).await?;
    track.apply_update(input);
    let track = state.repos.tracks.update(&track, deadline).await?;
    Ok(Json(DataResponse { data: track }))
}

/// DELETE /api/v1/tracks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = parse_entity_id(&id)?;
    state.repos.tracks.delete(id, state.deadline()).await?;
    tracing::info!(track_id = %id, "Track deleted");
    Ok(StatusCode::NO_CONTENT)
}
