//! Search query validation shared by the track and playlist repositories.
//!
//! Queries are case-insensitive regular expressions in the store's own
//! dialect. Only the shape of the query is checked here; pattern syntax is
//! left to the store, whose rejection is reported as an invalid argument.

use crate::error::CoreError;

/// Maximum accepted length of a search query, in characters.
pub const MAX_SEARCH_QUERY_LEN: usize = 256;

/// Validate a raw search query and return it ready to bind.
///
/// - Empty and whitespace-only queries are rejected.
/// - Queries longer than [`MAX_SEARCH_QUERY_LEN`] are rejected.
pub fn validate_query(query: &str) -> Result<&str, CoreError> {
    if query.trim().is_empty() {
        return Err(CoreError::InvalidArgument(
            "Search query cannot be empty".to_string(),
        ));
    }

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(CoreError::InvalidArgument(format!(
            "Search query exceeds {MAX_SEARCH_QUERY_LEN} characters"
        )));
    }

    Ok(query)
}
