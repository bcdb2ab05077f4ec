//! In-memory edits of a playlist's track list.
//!
//! The repository stores the list as a whole; membership changes are applied
//! here and then persisted with a full-list update.

/// A single membership edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackListChange {
    /// Append the track id. Duplicates are allowed.
    Add(String),
    /// Remove the first occurrence of the track id, if any.
    Remove(String),
}

impl TrackListChange {
    /// Build a change from the wire form `{ id, is_delete }`.
    pub fn from_flag(track_id: String, is_delete: bool) -> Self {
        if is_delete {
            Self::Remove(track_id)
        } else {
            Self::Add(track_id)
        }
    }
}

/// Apply `change` to `track_ids`. Returns `true` if the list was modified.
pub fn apply_track_change(track_ids: &mut Vec<String>, change: TrackListChange) -> bool {
    match change {
        TrackListChange::Add(id) => {
            track_ids.push(id);
            true
        }
        TrackListChange::Remove(id) => match track_ids.iter().position(|t| *t == id) {
            Some(index) => {
                track_ids.remove(index);
                true
            }
            None => false,
        },
    }
}
