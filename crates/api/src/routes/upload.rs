//! Route definitions for uploaded media files.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /              -> upload
/// GET  /{filename}    -> retrieve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .route("/{filename}", get(upload::retrieve))
}
