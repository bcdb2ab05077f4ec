use crate::error::CoreError;

/// Opaque entity identity. Generated by the application as a UUIDv7, so
/// identities of newer records sort after older ones.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh identity for a new record.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::now_v7()
}

/// Parse an externally supplied identifier.
///
/// Returns [`CoreError::InvalidArgument`] when `raw` is not a well-formed id.
pub fn parse_entity_id(raw: &str) -> Result<EntityId, CoreError> {
    uuid::Uuid::parse_str(raw.trim())
        .map_err(|_| CoreError::InvalidArgument(format!("Malformed identifier '{raw}'")))
}
