//! Repository for the `defects` table and its `defect_types` join.

use rollscope_core::types::DbId;
use sqlx::PgPool;

use crate::models::defect::{DefectJoinRow, DefectWithType};
use crate::models::defect_type::DefectTypeAggregateRow;

/// Read access to defects.
pub struct DefectRepo;

impl DefectRepo {
    // -----------------------------------------------------------------------
    // Aggregation queries
    // -----------------------------------------------------------------------

    /// Aggregate a roll's defects per defect type.
    ///
    /// One row per defect type with at least one defect on the roll, ordered
    /// by defect count descending (defect type id breaks ties). Averages are
    /// rounded to two decimals in SQL; minimums and maximums are exact.
    pub async fn aggregate_by_type(
        pool: &PgPool,
        roll_id: DbId,
    ) -> Result<Vec<DefectTypeAggregateRow>, sqlx::Error> {
        let query = "\
            SELECT \
                dt.id AS defect_type_id, \
                dt.code AS defect_type_code, \
                dt.description AS defect_type_description, \
                COUNT(d.id)::BIGINT AS defect_count, \
                ROUND(AVG(d.severity)::NUMERIC, 2)::FLOAT8 AS avg_severity, \
                MIN(d.severity)::INT4 AS min_severity, \
                MAX(d.severity)::INT4 AS max_severity, \
                ROUND(AVG(d.position_m)::NUMERIC, 2)::FLOAT8 AS avg_position_m, \
                MIN(d.position_m)::FLOAT8 AS min_position_m, \
                MAX(d.position_m)::FLOAT8 AS max_position_m \
            FROM defects d \
            INNER JOIN defect_types dt ON dt.id = d.defect_type_id \
            WHERE d.roll_id = $1 \
            GROUP BY dt.id, dt.code, dt.description \
            ORDER BY defect_count DESC, dt.id ASC";
        sqlx::query_as::<_, DefectTypeAggregateRow>(query)
            .bind(roll_id)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// List a roll's defects with their defect type, ordered along the roll.
    pub async fn list_by_roll(
        pool: &PgPool,
        roll_id: DbId,
    ) -> Result<Vec<DefectWithType>, sqlx::Error> {
        let query = "\
            SELECT \
                d.id, \
                d.roll_id, \
                d.defect_type_id, \
                d.position_m::FLOAT8 AS position_m, \
                d.severity::INT4 AS severity, \
                d.notes, \
                dt.code AS defect_type_code, \
                dt.description AS defect_type_description \
            FROM defects d \
            INNER JOIN defect_types dt ON dt.id = d.defect_type_id \
            WHERE d.roll_id = $1 \
            ORDER BY d.position_m ASC, d.id ASC";
        let rows = sqlx::query_as::<_, DefectJoinRow>(query)
            .bind(roll_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(DefectWithType::from).collect())
    }
}
