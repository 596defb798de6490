//! Repository for the `rolls` table.

use rollscope_core::types::DbId;
use sqlx::PgPool;

use crate::models::roll::{Roll, RollSummary};

/// Column list shared across queries. `length_m` is `NUMERIC` in storage.
const COLUMNS: &str = "id, roll_code, material, width_mm, length_m::FLOAT8 AS length_m, produced_at";

/// Read access to rolls.
pub struct RollRepo;

impl RollRepo {
    /// Find a roll by its ID. Returns `None` if no such roll exists.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Roll>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rolls WHERE id = $1");
        sqlx::query_as::<_, Roll>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rolls, most recently produced first, each with its defect count.
    pub async fn list_with_defect_count(pool: &PgPool) -> Result<Vec<RollSummary>, sqlx::Error> {
        let query = "\
            SELECT \
                r.id, \
                r.roll_code, \
                r.material, \
                r.width_mm, \
                r.length_m::FLOAT8 AS length_m, \
                r.produced_at, \
                COUNT(d.id)::BIGINT AS defect_count \
            FROM rolls r \
            LEFT JOIN defects d ON d.roll_id = r.id \
            GROUP BY r.id \
            ORDER BY r.produced_at DESC, r.id DESC";
        sqlx::query_as::<_, RollSummary>(query).fetch_all(pool).await
    }
}
