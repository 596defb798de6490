//! Integration tests for the roll and defect analytics endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use rollscope_core::types::DbId;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_roll(pool: &PgPool, code: &str, produced_at: &str) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO rolls (roll_code, material, width_mm, length_m, produced_at) \
         VALUES ($1, 'PET Film', 1200, 500, $2::TIMESTAMPTZ) \
         RETURNING id",
    )
    .bind(code)
    .bind(produced_at)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

async fn seed_defect(pool: &PgPool, roll_id: DbId, type_code: &str, position_m: f64, severity: i16) {
    sqlx::query(
        "INSERT INTO defects (roll_id, defect_type_id, position_m, severity, notes) \
         SELECT $1, id, $3::FLOAT8::NUMERIC, $4, 'seeded' FROM defect_types WHERE code = $2",
    )
    .bind(roll_id)
    .bind(type_code)
    .bind(position_m)
    .bind(severity)
    .execute(pool)
    .await
    .unwrap();
}

/// Roll ROLL-A1 with three scratches and two bubbles.
async fn seed_roll_a1(pool: &PgPool) -> DbId {
    let roll = seed_roll(pool, "ROLL-A1", "2026-01-10T08:00:00Z").await;
    seed_defect(pool, roll, "SCR", 50.0, 1).await;
    seed_defect(pool, roll, "SCR", 101.5, 4).await;
    seed_defect(pool, roll, "SCR", 150.0, 3).await;
    seed_defect(pool, roll, "BLB", 180.0, 2).await;
    seed_defect(pool, roll, "BLB", 220.0, 4).await;
    roll
}

// ---------------------------------------------------------------------------
// GET /api/v1/rolls/{roll_id}/defects-stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn defect_stats_returns_aggregates(pool: PgPool) {
    let roll = seed_roll_a1(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/rolls/{roll}/defects-stats")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["rollId"], roll);
    assert_eq!(data["rollCode"], "ROLL-A1");
    assert_eq!(data["material"], "PET Film");
    assert_eq!(data["lengthM"], 500.0);
    assert_eq!(data["totalDefects"], 5);

    let by_type = data["defectsByType"].as_array().unwrap();
    assert_eq!(by_type.len(), 2);
    assert_eq!(by_type[0]["defectTypeCode"], "SCR");
    assert_eq!(by_type[0]["count"], 3);
    assert_eq!(by_type[0]["avgSeverity"], 2.67);
    assert_eq!(by_type[0]["avgPositionM"], 100.5);
    assert_eq!(by_type[1]["defectTypeCode"], "BLB");
    assert_eq!(by_type[1]["count"], 2);
    assert_eq!(by_type[1]["minPositionM"], 180.0);
    assert_eq!(by_type[1]["maxPositionM"], 220.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn defect_stats_for_roll_without_defects_is_ok(pool: PgPool) {
    let roll = seed_roll(&pool, "ROLL-CLEAN", "2026-01-10T08:00:00Z").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/rolls/{roll}/defects-stats")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["totalDefects"], 0);
    assert_eq!(json["data"]["defectsByType"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn defect_stats_for_missing_roll_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/rolls/987654/defects-stats").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("987654"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn defect_stats_rejects_invalid_ids(pool: PgPool) {
    for (uri, code) in [
        ("/api/v1/rolls/abc/defects-stats", "BAD_REQUEST"),
        ("/api/v1/rolls/1e3/defects-stats", "BAD_REQUEST"),
        ("/api/v1/rolls/0/defects-stats", "VALIDATION_ERROR"),
        ("/api/v1/rolls/-2/defects-stats", "VALIDATION_ERROR"),
        ("/api/v1/rolls/1.5/defects-stats", "VALIDATION_ERROR"),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], code, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// GET /api/v1/rolls/{roll_id}/defects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn defects_are_ordered_by_position(pool: PgPool) {
    let roll = seed_roll_a1(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/rolls/{roll}/defects")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let defects = json["data"].as_array().unwrap();
    let positions: Vec<f64> = defects
        .iter()
        .map(|d| d["position_m"].as_f64().unwrap())
        .collect();
    assert_eq!(positions, vec![50.0, 101.5, 150.0, 180.0, 220.0]);
    assert_eq!(defects[0]["defect_types"]["code"], "SCR");
    assert_eq!(defects[0]["defect_types"]["description"], "Surface scratch");
    assert!(defects[0].get("defect_type").is_none());
    assert_eq!(defects[0]["notes"], "seeded");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn defects_reject_invalid_id(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/rolls/-1/defects").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// GET /api/v1/rolls/{roll_id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn roll_data_combines_stats_and_defects(pool: PgPool) {
    let roll = seed_roll_a1(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/rolls/{roll}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["roll"]["id"], roll);
    assert_eq!(data["roll"]["rollCode"], "ROLL-A1");
    assert_eq!(data["roll"]["lengthM"], 500.0);
    assert_eq!(data["aggregatedStats"]["totalDefects"], 5);
    assert_eq!(data["aggregatedStats"]["defectsByType"].as_array().unwrap().len(), 2);
    assert_eq!(data["individualDefects"].as_array().unwrap().len(), 5);
    assert!(data["individualDefects"][0]["position_m"].is_f64());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn roll_data_for_missing_roll_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/rolls/31337").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// GET /api/v1/rolls
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_rolls_includes_defect_counts(pool: PgPool) {
    let a1 = seed_roll_a1(&pool).await;
    let clean = seed_roll(&pool, "ROLL-CLEAN", "2026-03-01T00:00:00Z").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/rolls").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rolls = json["data"].as_array().unwrap();
    assert_eq!(rolls.len(), 2);
    assert_eq!(rolls[0]["id"], clean);
    assert_eq!(rolls[0]["defect_count"], 0);
    assert_eq!(rolls[1]["id"], a1);
    assert_eq!(rolls[1]["defect_count"], 5);
    assert_eq!(rolls[1]["width_mm"], 1200);
}
