//! Resolving a playlist's track references for export.
//!
//! Track ids in a playlist are weak references. A reference that cannot be
//! resolved (malformed id, unknown track, soft-deleted track) is reported as
//! [`ResolvedTrack::Missing`] and the export carries on with the rest. Only a
//! store failure aborts the export, since it would affect every entry alike.

use std::collections::HashMap;

use muslib_core::types::{parse_entity_id, EntityId};

use crate::deadline::Deadline;
use crate::error::RepoError;
use crate::models::playlist::Playlist;
use crate::models::track::Track;
use crate::registry::Repositories;

/// Outcome of resolving one entry of a playlist's track list.
#[derive(Debug, Clone)]
pub enum ResolvedTrack {
    Found(Track),
    Missing { track_id: String },
}

impl ResolvedTrack {
    pub fn track(&self) -> Option<&Track> {
        match self {
            Self::Found(track) => Some(track),
            Self::Missing { .. } => None,
        }
    }
}

impl Repositories {
    /// Resolve every entry of `playlist.track_ids`, in order, with a single
    /// store round trip.
    pub async fn resolve_playlist_tracks(
        &self,
        playlist: &Playlist,
        deadline: Deadline,
    ) -> Result<Vec<ResolvedTrack>, RepoError> {
        let parsed: Vec<Option<EntityId>> = playlist
            .track_ids
            .iter()
            .map(|raw| parse_entity_id(raw).ok())
            .collect();

        let mut ids: Vec<EntityId> = parsed.iter().flatten().copied().collect();
        ids.sort_unstable();
        ids.dedup();

        let found: HashMap<EntityId, Track> = self
            .tracks
            .find_live_by_ids(&ids, deadline)
            .await?
            .into_iter()
            .map(|track| (track.id, track))
            .collect();

        let resolved = playlist
            .track_ids
            .iter()
            .zip(parsed)
            .map(|(raw, id)| match id.and_then(|id| found.get(&id)) {
                Some(track) => ResolvedTrack::Found(track.clone()),
                None => {
                    tracing::warn!(
                        playlist_id = %playlist.id,
                        track_id = %raw,
                        "Skipping unresolvable playlist track"
                    );
                    ResolvedTrack::Missing {
                        track_id: raw.clone(),
                    }
                }
            })
            .collect();

        Ok(resolved)
    }
}
