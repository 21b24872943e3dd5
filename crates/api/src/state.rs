use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). There is no other cross-request state: every core operation
/// runs inside a single request against the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: threadline_db::DbPool,
    /// Server configuration (JWT secret, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
