//! Handlers for roll listing and per-roll defect analytics.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use rollscope_core::roll::is_decimal_literal;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject path segments that are not plain decimal numbers (`abc`, `1e3`).
///
/// Numeric but invalid ids (`0`, `-3`, `1.5`) pass through here and are
/// rejected by the service's roll-id validation instead.
fn numeric_segment(raw: &str) -> AppResult<&str> {
    if !is_decimal_literal(raw.trim()) {
        return Err(AppError::BadRequest(
            "Invalid roll ID format. Must be a number.".to_string(),
        ));
    }
    Ok(raw)
}

/// GET /api/v1/rolls
///
/// Lists every roll with its defect count, most recently produced first.
pub async fn list_rolls(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rolls = state.defects.list_rolls().await?;
    Ok(Json(DataResponse { data: rolls }))
}

/// GET /api/v1/rolls/{roll_id}
///
/// Roll identity, aggregated statistics and individual defects in one payload.
pub async fn get_roll_data(
    State(state): State<AppState>,
    Path(roll_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let roll_id = numeric_segment(&roll_id)?;
    let data = state.defects.get_roll_data(roll_id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/rolls/{roll_id}/defects-stats
pub async fn get_defect_stats(
    State(state): State<AppState>,
    Path(roll_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let roll_id = numeric_segment(&roll_id)?;
    let stats = state.defects.get_aggregated_defects(roll_id).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/rolls/{roll_id}/defects
///
/// Individual defects ordered by position along the roll. An unknown roll
/// yields an empty list.
pub async fn list_defects(
    State(state): State<AppState>,
    Path(roll_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let roll_id = numeric_segment(&roll_id)?;
    let defects = state.defects.get_defects(roll_id).await?;
    Ok(Json(DataResponse { data: defects }))
}
