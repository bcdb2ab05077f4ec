//! Repository for the `track` collection.

use muslib_core::search;
use muslib_core::types::{new_entity_id, EntityId};

use crate::deadline::Deadline;
use crate::error::RepoError;
use crate::models::track::{CreateTrack, Track};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "_id, create_at, update_at, delete_at, name, title, artist_id, album, \
                       genre, release_date, duration, file_url";

const ENTITY: &str = "Track";

/// Persistence operations for tracks.
#[derive(Debug, Clone)]
pub struct TrackRepo {
    pool: DbPool,
}

impl TrackRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new track with a fresh id. `create_at` and `update_at` are
    /// set to the same instant; `delete_at` is left absent.
    pub async fn create(&self, input: &CreateTrack, deadline: Deadline) -> Result<Track, RepoError> {
        let query = format!(
            "INSERT INTO track \
                (_id, create_at, update_at, name, title, artist_id, album, genre, \
                 release_date, duration, file_url) \
             VALUES ($1, $2, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Track>(&query)
                    .bind(new_entity_id())
                    .bind(chrono::Utc::now())
                    .bind(&input.name)
                    .bind(&input.title)
                    .bind(&input.artist_id)
                    .bind(&input.album)
                    .bind(&input.genre)
                    .bind(input.release_date)
                    .bind(input.duration)
                    .bind(&input.file_url)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(RepoError::from)
            })
            .await
    }

    /// Find a live track by id.
    pub async fn find_by_id(&self, id: EntityId, deadline: Deadline) -> Result<Track, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM track WHERE _id = $1 AND delete_at IS NULL");
        deadline
            .run(async {
                sqlx::query_as::<_, Track>(&query)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| RepoError::not_found(ENTITY, id))
            })
            .await
    }

    /// Find a track by id, including soft-deleted ones.
    pub async fn find_by_id_include_deleted(
        &self,
        id: EntityId,
        deadline: Deadline,
    ) -> Result<Track, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM track WHERE _id = $1");
        deadline
            .run(async {
                sqlx::query_as::<_, Track>(&query)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| RepoError::not_found(ENTITY, id))
            })
            .await
    }

    /// List all live tracks, oldest first.
    pub async fn find_many(&self, deadline: Deadline) -> Result<Vec<Track>, RepoError> {
        let query = format!(
            "SELECT {COLUMNS} FROM track WHERE delete_at IS NULL ORDER BY create_at, _id"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Track>(&query)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(RepoError::from)
            })
            .await
    }

    /// Fetch the live tracks among `ids`. Unknown and soft-deleted ids are
    /// simply absent from the result; order is unspecified.
    pub async fn find_live_by_ids(
        &self,
        ids: &[EntityId],
        deadline: Deadline,
    ) -> Result<Vec<Track>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM track WHERE _id = ANY($1) AND delete_at IS NULL"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Track>(&query)
                    .bind(ids)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(RepoError::from)
            })
            .await
    }

    /// Overwrite the mutable fields of a live track and refresh `update_at`.
    ///
    /// The caller merges partial updates into `track` beforehand. `update_at`
    /// always moves forward, even when two updates land in the same
    /// microsecond.
    pub async fn update(&self, track: &Track, deadline: Deadline) -> Result<Track, RepoError> {
        let query = format!(
            "UPDATE track SET \
                name = $2, \
                title = $3, \
                artist_id = $4, \
                album = $5, \
                genre = $6, \
                file_url = $7, \
                update_at = GREATEST(clock_timestamp(), update_at + INTERVAL '1 microsecond') \
             WHERE _id = $1 AND delete_at IS NULL \
             RETURNING {COLUMNS}"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Track>(&query)
                    .bind(track.id)
                    .bind(&track.name)
                    .bind(&track.title)
                    .bind(&track.artist_id)
                    .bind(&track.album)
                    .bind(&track.genre)
                    .bind(&track.file_url)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| RepoError::not_found(ENTITY, track.id))
            })
            .await
    }

    /// Soft-delete a live track. Deleting an already deleted track is
    /// `NotFound`.
    pub async fn delete(&self, id: EntityId, deadline: Deadline) -> Result<(), RepoError> {
        deadline
            .run(async {
                let result = sqlx::query(
                    "UPDATE track SET delete_at = clock_timestamp() \
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

    /// Case-insensitive pattern search over name, title, album and genre of
    /// live tracks.
    pub async fn search(&self, query: &str, deadline: Deadline) -> Result<Vec<Track>, RepoError> {
        let pattern = search::validate_query(query)?;
        let sql = format!(
            "SELECT {COLUMNS} FROM track \
             WHERE delete_at IS NULL \
               AND (name ~* $1 OR title ~* $1 OR album ~* $1 OR genre ~* $1) \
             ORDER BY create_at, _id"
        );
        deadline
            .run(async {
                sqlx::query_as::<_, Track>(&sql)
                    .bind(pattern)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(RepoError::from_search)
            })
            .await
    }
}
