use std::sync::Arc;

use muslib_db::{Deadline, Repositories};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the repositories share one pool and the config is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(repos: Repositories, config: ServerConfig) -> Self {
        Self {
            repos,
            config: Arc::new(config),
        }
    }

    /// A fresh store deadline for the current request.
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.config.store_timeout())
    }
}
