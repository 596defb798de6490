//! Defect type reference data and the per-type aggregate row.

use rollscope_core::defect_stats::DefectTypeAggregate;
use rollscope_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Identity fields of a defect type, embedded in individual defects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefectTypeRef {
    pub id: DbId,
    pub code: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Aggregated view (returned by `DefectRepo::aggregate_by_type`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DefectTypeAggregateRow {
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

impl From<DefectTypeAggregateRow> for DefectTypeAggregate {
    fn from(row: DefectTypeAggregateRow) -> Self {
        DefectTypeAggregate {
            defect_type_id: row.defect_type_id,
            defect_type_code: row.defect_type_code,
            defect_type_description: row.defect_type_description,
            defect_count: row.defect_count,
            avg_severity: row.avg_severity,
            min_severity: row.min_severity,
            max_severity: row.max_severity,
            avg_position_m: row.avg_position_m,
            min_position_m: row.min_position_m,
            max_position_m: row.max_position_m,
        }
    }
}
