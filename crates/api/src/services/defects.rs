//! Defect analytics service.
//!
//! Validates roll ids, orchestrates the store calls and shapes the raw
//! rows into response DTOs. Validation failures never reach the store, and
//! a roll that exists but has no defects is a success with a zero total.

use std::sync::Arc;

use rollscope_core::defect_stats::{build_aggregated_response, AggregatedDefectsResponse, DefectStats};
use rollscope_core::error::CoreError;
use rollscope_core::roll::{RollId, RollIdentity};
use rollscope_core::types::DbId;
use rollscope_db::models::defect::DefectWithType;
use rollscope_db::models::roll::RollSummary;
use rollscope_db::store::DefectStore;
use serde::Serialize;

/// Errors produced by [`DefectsService`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Validation, not-found and mapping failures.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure, passed through untouched.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

// ---------------------------------------------------------------------------
// Composite roll view
// ---------------------------------------------------------------------------

/// Roll identity block of [`RollData`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollInfo {
    pub id: DbId,
    pub roll_code: String,
    pub material: String,
    pub length_m: f64,
}

/// Statistics block of [`RollData`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedStats {
    pub total_defects: u64,
    pub defects_by_type: Vec<DefectStats>,
}

/// Everything the roll detail page needs in one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollData {
    pub roll: RollInfo,
    pub aggregated_stats: AggregatedStats,
    pub individual_defects: Vec<DefectWithType>,
}

impl RollData {
    fn assemble(aggregated: AggregatedDefectsResponse, individual_defects: Vec<DefectWithType>) -> Self {
        RollData {
            roll: RollInfo {
                id: aggregated.roll_id,
                roll_code: aggregated.roll_code,
                material: aggregated.material,
                length_m: aggregated.length_m,
            },
            aggregated_stats: AggregatedStats {
                total_defects: aggregated.total_defects,
                defects_by_type: aggregated.defects_by_type,
            },
            individual_defects,
        }
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Defect analytics over an injected [`DefectStore`].
#[derive(Clone)]
pub struct DefectsService {
    store: Arc<dyn DefectStore>,
}

impl DefectsService {
    pub fn new(store: Arc<dyn DefectStore>) -> Self {
        Self { store }
    }

    /// Aggregated defect statistics for a roll.
    ///
    /// Fails with `CoreError::Validation` for anything that is not a
    /// positive integer and with `CoreError::NotFound` when the roll does
    /// not exist; the aggregation query is not issued in either case.
    pub async fn get_aggregated_defects<R>(
        &self,
        roll_id: R,
    ) -> Result<AggregatedDefectsResponse, ServiceError>
    where
        R: TryInto<RollId, Error = CoreError>,
    {
        let roll_id = roll_id.try_into()?;
        self.aggregated_for(roll_id).await
    }

    /// Individual defects of a roll, ordered by position.
    pub async fn get_defects<R>(&self, roll_id: R) -> Result<Vec<DefectWithType>, ServiceError>
    where
        R: TryInto<RollId, Error = CoreError>,
    {
        let roll_id = roll_id.try_into()?;
        Ok(self.store.find_defects_by_roll(roll_id.get()).await?)
    }

    /// Roll identity, aggregated statistics and individual defects together.
    pub async fn get_roll_data<R>(&self, roll_id: R) -> Result<RollData, ServiceError>
    where
        R: TryInto<RollId, Error = CoreError>,
    {
        let roll_id = roll_id.try_into()?;
        let aggregated = self.aggregated_for(roll_id).await?;
        let defects = self.store.find_defects_by_roll(roll_id.get()).await?;
        Ok(RollData::assemble(aggregated, defects))
    }

    /// All rolls with their defect counts, most recently produced first.
    pub async fn list_rolls(&self) -> Result<Vec<RollSummary>, ServiceError> {
        Ok(self.store.list_rolls().await?)
    }

    async fn aggregated_for(&self, roll_id: RollId) -> Result<AggregatedDefectsResponse, ServiceError> {
        let roll = self
            .store
            .find_roll(roll_id.get())
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Roll",
                id: roll_id.get(),
            })?;

        let rows = self.store.aggregate_defects_by_type(roll_id.get()).await?;
        let response = build_aggregated_response(
            RollIdentity::from(&roll),
            rows.into_iter().map(Into::into).collect(),
        )?;

        tracing::debug!(
            roll_id = roll_id.get(),
            total_defects = response.total_defects,
            defect_types = response.defects_by_type.len(),
            "Built aggregated defect statistics"
        );
        Ok(response)
    }
}
