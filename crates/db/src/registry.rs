//! Handle aggregating every repository.

use crate::repositories::{PlaylistRepo, TrackRepo};
use crate::DbPool;

/// The repositories of the service, built once at startup around a shared
/// pool and passed to whoever needs them.
///
/// Cloning is cheap: the pool is reference counted.
#[derive(Debug, Clone)]
pub struct Repositories {
    pool: DbPool,
    pub tracks: TrackRepo,
    pub playlists: PlaylistRepo,
}

impl Repositories {
    pub fn new(pool: DbPool) -> Self {
        Self {
            tracks: TrackRepo::new(pool.clone()),
            playlists: PlaylistRepo::new(pool.clone()),
            pool,
        }
    }

    /// The underlying pool, for health checks.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
