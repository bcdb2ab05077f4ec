//! Document-store access for the music library.
//!
//! Owns the connection pool, the per-collection repositories, and the
//! [`Repositories`] registry that is built once at startup and handed to the
//! HTTP layer.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod deadline;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;
pub mod repositories;

pub use deadline::Deadline;
pub use error::{ErrorKind, RepoError};
pub use registry::Repositories;

pub type DbPool = sqlx::PgPool;

/// Default pool size when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
///
/// `acquire_timeout` bounds both the initial connection and every later wait
/// for a free connection.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
