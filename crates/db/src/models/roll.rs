//! Roll entity models.

use rollscope_core::roll::RollIdentity;
use rollscope_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rolls` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Roll {
    pub id: DbId,
    pub roll_code: String,
    pub material: String,
    pub width_mm: i32,
    pub length_m: f64,
    pub produced_at: Timestamp,
}

impl From<&Roll> for RollIdentity {
    fn from(roll: &Roll) -> Self {
        RollIdentity {
            id: roll.id,
            roll_code: roll.roll_code.clone(),
            material: roll.material.clone(),
            length_m: roll.length_m,
        }
    }
}

/// A roll together with the number of defects recorded on it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct RollSummary {
    pub id: DbId,
    pub roll_code: String,
    pub material: String,
    pub width_mm: i32,
    pub length_m: f64,
    pub produced_at: Timestamp,
    pub defect_count: i64,
}
