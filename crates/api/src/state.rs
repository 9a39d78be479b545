//! Shared application state passed to all handlers.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Application-wide shared state.
///
/// Cloned per request by axum; everything inside is cheaply clonable
/// (the pool is an `Arc` internally).
#[derive(Clone)]
pub struct AppState {
    /// Postgres connection pool.
    pub pool: strata_db::DbPool,
    /// Server configuration (JWT secrets, timeouts).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: strata_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
