//! Repository for the `playlist` collection.

use muslib_core::search;
use muslib_core::types::{new_entity_id, EntityId};

use crate::deadline::Deadline;
use crate::error::RepoError;
use crate::models::playlist::{CreatePlaylist, Playlist};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "_id, create_at, update_at, delete_at, title, album_cover, track_ids";

const ENTITY: &str = "Playlist";

/// Persistence operations for playlists.
#[derive(Debug, Clone)]
pub struct PlaylistRepo {
    pool: DbPool,
}

impl PlaylistRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new playlist with a fresh id. Track ids are stored as given,
    /// without checking that they exist.
    pub async fn create(
        &self,
        input: &CreatePlaylist,
        deadline: Deadline,
    ) -> Result<Playlist, RepoError> {
        let query = format!(
            "INSERT INTO playlist (_id, create_at, update_at, title, album_cover, track_ids) \
             VALUES ($1, $2, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Playlist>(&query)
                    .bind(new_entity_id())
                    .bind(chrono::Utc::now())
                    .bind(&input.title)
                    .bind(&input.album_cover)
                    .bind(&input.track_ids)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(RepoError::from)
            })
            .await
    }

    /// Find a live playlist by id.
    pub async fn find_by_id(
        &self,
        id: EntityId,
        deadline: Deadline,
    ) -> Result<Playlist, RepoError> {
        let query =
            format!("SELECT {COLUMNS} FROM playlist WHERE _id = $1 AND delete_at IS NULL");
        deadline
            .run(async {
                sqlx::query_as::<_, Playlist>(&query)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| RepoError::not_found(ENTITY, id))
            })
            .await
    }

    /// List all live playlists, oldest first.
    pub async fn find_many(&self, deadline: Deadline) -> Result<Vec<Playlist>, RepoError> {
        let query = format!(
            "SELECT {COLUMNS} FROM playlist WHERE delete_at IS NULL ORDER BY create_at, _id"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Playlist>(&query)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(RepoError::from)
            })
            .await
    }

    /// Overwrite title, cover and the full track list of a live playlist and
    /// refresh `update_at`.
    pub async fn update(
        &self,
        playlist: &Playlist,
        deadline: Deadline,
    ) -> Result<Playlist, RepoError> {
        let query = format!(
            "UPDATE playlist SET \
                title = $2, \
                album_cover = $3, \
                track_ids = $4, \
                update_at = GREATEST(clock_timestamp(), update_at + INTERVAL '1 microsecond') \
             WHERE _id = $1 AND delete_at IS NULL \
             RETURNING {COLUMNS}"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Playlist>(&query)
                    .bind(playlist.id)
                    .bind(&playlist.title)
                    .bind(&playlist.album_cover)
                    .bind(&playlist.track_ids)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| RepoError::not_found(ENTITY, playlist.id))
            })
            .await
    }

    /// Soft-delete a live playlist. Deleting twice is `NotFound`.
    pub async fn delete(&self, id: EntityId, deadline: Deadline) -> Result<(), RepoError> {
        deadline
            .run(async {
                let result = sqlx::query(
                    "UPDATE playlist SET delete_at = clock_timestamp() \
                     WHERE _id = $1 AND delete_at IS NULL",
                )
                .bind(id)
                .execute(&self.pool)
                .await?;
                if result.rows_affected() == 0 {
                    return Err(RepoError::not_found(ENTITY, id));
                }
                Ok(())
            })
            .await
    }

    /// Case-insensitive pattern search over the title of live playlists.
    pub async fn search(
        &self,
        query: &str,
        deadline: Deadline,
    ) -> Result<Vec<Playlist>, RepoError> {
        let pattern = search::validate_query(query)?;
        let sql = format!(
            "SELECT {COLUMNS} FROM playlist \
             WHERE delete_at IS NULL AND title ~* $1 \
             ORDER BY create_at, _id"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Playlist>(&sql)
                    .bind(pattern)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(RepoError::from_search)
            })
            .await
    }
}
