//! Repository error taxonomy.

use std::time::Duration;

use muslib_core::error::CoreError;
use muslib_core::types::EntityId;

/// PostgreSQL SQLSTATE for "invalid regular expression".
const INVALID_REGULAR_EXPRESSION: &str = "2201B";

/// Error returned by every repository operation.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A domain-level error (invalid argument, not found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Transport, serialization, or store-side failure.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// The caller-supplied deadline elapsed before the store answered.
    #[error("Store deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

/// Coarse classification of a [`RepoError`], used to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed identifier or query. Always the caller's fault.
    InvalidArgument,
    /// No live record matches.
    NotFound,
    /// The store failed or did not answer in time.
    Store,
}

impl RepoError {
    pub fn not_found(entity: &'static str, id: EntityId) -> Self {
        Self::Core(CoreError::NotFound { entity, id })
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(CoreError::InvalidArgument(_)) => ErrorKind::InvalidArgument,
            Self::Core(CoreError::NotFound { .. }) => ErrorKind::NotFound,
            Self::Store(_) | Self::DeadlineExceeded(_) => ErrorKind::Store,
        }
    }

    /// Reclassify a store-side regex compilation failure as an invalid argument.
    pub(crate) fn from_search(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(INVALID_REGULAR_EXPRESSION) {
                return Self::Core(CoreError::InvalidArgument(format!(
                    "Invalid search pattern: {}",
                    db_err.message()
                )));
            }
        }
        Self::Store(err)
    }
}
