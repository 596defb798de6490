//! The storage seam consumed by the service layer.
//!
//! [`DefectStore`] names the queries the defect analytics need. The
//! Postgres implementation delegates to the repositories; tests substitute
//! in-memory stores.

use async_trait::async_trait;
use rollscope_core::types::DbId;

use crate::models::defect::DefectWithType;
use crate::models::defect_type::DefectTypeAggregateRow;
use crate::models::roll::{Roll, RollSummary};
use crate::repositories::{DefectRepo, RollRepo};
use crate::DbPool;

#[async_trait]
pub trait DefectStore: Send + Sync {
    /// Look up a roll. `Ok(None)` when it does not exist.
    async fn find_roll(&self, roll_id: DbId) -> Result<Option<Roll>, sqlx::Error>;

    /// Per-defect-type aggregates for a roll, count descending.
    async fn aggregate_defects_by_type(
        &self,
        roll_id: DbId,
    ) -> Result<Vec<DefectTypeAggregateRow>, sqlx::Error>;

    /// Individual defects for a roll, position ascending.
    async fn find_defects_by_roll(&self, roll_id: DbId) -> Result<Vec<DefectWithType>, sqlx::Error>;

    /// Every roll with its defect count, most recently produced first.
    async fn list_rolls(&self) -> Result<Vec<RollSummary>, sqlx::Error>;
}

/// [`DefectStore`] backed by the shared Postgres pool.
#[derive(Clone)]
pub struct PgDefectStore {
    pool: DbPool,
}

impl PgDefectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DefectStore for PgDefectStore {
    async fn find_roll(&self, roll_id: DbId) -> Result<Option<Roll>, sqlx::Error> {
        RollRepo::find_by_id(&self.pool, roll_id).await
    }

    async fn aggregate_defects_by_type(
        &self,
        roll_id: DbId,
    ) -> Result<Vec<DefectTypeAggregateRow>, sqlx::Error> {
        let rows = DefectRepo::aggregate_by_type(&self.pool, roll_id).await?;
        tracing::debug!(roll_id, defect_types = rows.len(), "Aggregated defects by type");
        Ok(rows)
    }

    async fn find_defects_by_roll(&self, roll_id: DbId) -> Result<Vec<DefectWithType>, sqlx::Error> {
        let defects = DefectRepo::list_by_roll(&self.pool, roll_id).await?;
        tracing::debug!(roll_id, defects = defects.len(), "Loaded defects for roll");
        Ok(defects)
    }

    async fn list_rolls(&self) -> Result<Vec<RollSummary>, sqlx::Error> {
        RollRepo::list_with_defect_count(&self.pool).await
    }
}
