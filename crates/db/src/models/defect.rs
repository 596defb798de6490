//! Individual defect models.

use rollscope_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::defect_type::DefectTypeRef;

/// Flat join row of `defects` and `defect_types`.
#[derive(Debug, Clone, FromRow)]
pub struct DefectJoinRow {
    pub id: DbId,
    pub roll_id: DbId,
    pub defect_type_id: DbId,
    pub position_m: f64,
    pub severity: i32,
    pub notes: Option<String>,
    pub defect_type_code: String,
    pub defect_type_description: String,
}

/// A single defect with its defect type nested, as sent to the dashboard map.
///
/// The map reads the nested type from the `defect_types` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefectWithType {
    pub id: DbId,
    pub roll_id: DbId,
    pub defect_type_id: DbId,
    pub position_m: f64,
    pub severity: i32,
    pub notes: Option<String>,
    #[serde(rename = "defect_types")]
    pub defect_type: DefectTypeRef,
}

impl From<DefectJoinRow> for DefectWithType {
    fn from(row: DefectJoinRow) -> Self {
        DefectWithType {
            id: row.id,
            roll_id: row.roll_id,
            defect_type_id: row.defect_type_id,
            position_m: row.position_m,
            severity: row.severity,
            notes: row.notes,
            defect_type: DefectTypeRef {
                id: row.defect_type_id,
                code: row.defect_type_code,
                description: row.defect_type_description,
            },
        }
    }
}
