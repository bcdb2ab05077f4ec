//! Entity structs and DTOs.
//!
//! Each entity module contains:
//! - A `FromRow` + `Serialize` struct matching the stored document
//! - A `Deserialize` + `Validate` create DTO
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod playlist;
pub mod search;
pub mod track;
