//! Per-defect-type statistics for a roll.
//!
//! The database does the grouping and rounding; this module converts the
//! raw aggregate rows into the response DTOs and computes the roll total.
//! Field names on the DTOs are camelCase because the dashboard consumes
//! them as-is.

use serde::Serialize;

use crate::error::CoreError;
use crate::roll::RollIdentity;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One raw aggregate row as produced by the grouping query.
///
/// `defect_count` is the database `COUNT(..)` value (a `BIGINT`). Averages
/// are already rounded to two decimals; minimums and maximums are exact.
#[derive(Debug, Clone, PartialEq)]
pub struct DefectTypeAggregate {
    pub defect_type_id: DbId,
    pub defect_type_code: String,
    pub defect_type_description: String,
    pub defect_count: i64,
    pub avg_severity: f64,
    pub min_severity: i32,
    pub max_severity: i32,
    pub avg_position_m: f64,
    pub min_position_m: f64,
    pub max_position_m: f64,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Statistics for a single defect type on a roll.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectStats {
    pub defect_type_id: DbId,
    pub defect_type_code: String,
    pub defect_type_description: String,
    pub count: u64,
    pub avg_severity: f64,
    pub min_severity: i32,
    pub max_severity: i32,
    pub avg_position_m: f64,
    pub min_position_m: f64,
    pub max_position_m: f64,
}

/// Roll identity plus its defect statistics, ordered by count descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedDefectsResponse {
    pub roll_id: DbId,
    pub roll_code: String,
    pub material: String,
    pub length_m: f64,
    pub total_defects: u64,
    pub defects_by_type: Vec<DefectStats>,
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

impl TryFrom<DefectTypeAggregate> for DefectStats {
    type Error = CoreError;

    fn try_from(row: DefectTypeAggregate) -> Result<Self, Self::Error> {
        let count = u64::try_from(row.defect_count).map_err(|_| {
            CoreError::Internal(format!(
                "defect count {} for defect type {} is negative",
                row.defect_count, row.defect_type_code
            ))
        })?;

        Ok(DefectStats {
            defect_type_id: row.defect_type_id,
            defect_type_code: row.defect_type_code,
            defect_type_description: row.defect_type_description,
            count,
            avg_severity: row.avg_severity,
            min_severity: row.min_severity,
            max_severity: row.max_severity,
            avg_position_m: row.avg_position_m,
            min_position_m: row.min_position_m,
            max_position_m: row.max_position_m,
        })
    }
}

/// Sum of all per-type counts. Zero for an empty slice.
pub fn total_defects(stats: &[DefectStats]) -> u64 {
    stats.iter().map(|s| s.count).sum()
}

/// Build the aggregated response for a roll.
///
/// Row order is preserved, so the caller's query order (count descending)
/// is what the response carries.
pub fn build_aggregated_response(
    roll: RollIdentity,
    aggregates: Vec<DefectTypeAggregate>,
) -> Result<AggregatedDefectsResponse, CoreError> {
    let defects_by_type = aggregates
        .into_iter()
        .map(DefectStats::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AggregatedDefectsResponse {
        roll_id: roll.id,
        roll_code: roll.roll_code,
        material: roll.material,
        length_m: roll.length_m,
        total_defects: total_defects(&defects_by_type),
        defects_by_type,
    })
}
