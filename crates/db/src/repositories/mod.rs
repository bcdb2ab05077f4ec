//! One repository per collection.
//!
//! Every read, update and delete only observes live documents
//! (`delete_at IS NULL`); nothing is ever physically removed.

pub mod playlist_repo;
pub mod track_repo;

pub use playlist_repo::PlaylistRepo;
pub use track_repo::TrackRepo;
