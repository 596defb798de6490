use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::DefectsService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: rollscope_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Defect analytics service.
    pub defects: DefectsService,
}
