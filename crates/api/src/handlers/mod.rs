//! Request handlers for the music library resources.
//!
//! Handlers parse path identifiers, validate request bodies, and delegate to
//! the repositories in `muslib_db`. Each request gets one store deadline
//! shared by every repository call it makes.

pub mod playlist;
pub mod search;
pub mod track;
pub mod upload;
