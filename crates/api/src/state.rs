use std::sync::Arc;

use tempo_outbound::OutboundClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tempo_db::DbPool,
    /// Server configuration (JWT secret, timeouts, collaborator URLs).
    pub config: Arc<ServerConfig>,
    /// Fire-and-forget client for the analytics and automation collaborators.
    pub outbound: Arc<OutboundClient>,
}
