//! Domain types and pure helpers for the music library service.
//!
//! Nothing in this crate performs I/O; it is shared by the repository layer
//! (`muslib-db`) and the HTTP layer (`muslib-api`).

pub mod error;
pub mod m3u;
pub mod playlist;
pub mod search;
pub mod types;
pub mod upload;
