//! Route definitions for rolls and their defect analytics.
//!
//! Nested at `/rolls` in `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::rolls;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rolls::list_rolls))
        .route("/{roll_id}", get(rolls::get_roll_data))
        .route("/{roll_id}/defects-stats", get(rolls::get_defect_stats))
        .route("/{roll_id}/defects", get(rolls::list_defects))
}
