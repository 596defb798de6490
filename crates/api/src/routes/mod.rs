pub mod health;
pub mod rolls;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rolls                                           list rolls with defect counts
/// /rolls/{roll_id}                                 roll + stats + individual defects
/// /rolls/{roll_id}/defects-stats                   aggregated statistics per defect type
/// /rolls/{roll_id}/defects                         individual defects by position
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/rolls", rolls::router())
}
