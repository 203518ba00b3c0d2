//! Integration tests for recording measurements and the goal evaluation
//! returned with them.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_json_auth, token_for};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

fn measurement(measured_on: &str, weight_kg: f64) -> serde_json::Value {
    json!({
        "measured_on": measured_on,
        "weight_kg": weight_kg,
        "waist_cm": 90.0,
        "belly_cm": 95.0,
        "hips_cm": 100.0,
        "thigh_cm": 55.0
    })
}

async fn record(
    pool: &PgPool,
    token: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/measurements", token, body).await;
    let status = response.status();
    (status, body_json(response).await)
}

async fn create_main_goal(pool: &PgPool, token: &str, target_weight_kg: f64) {
    let body = json!({
        "kind": "main",
        "target_weight_kg": target_weight_kg,
        "target_date": "2025-12-31"
    });
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/goals", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn measurement_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM measurements")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_measurement_never_achieves_a_goal(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    create_main_goal(&pool, &token, 90.0).await;

    // Already below the target, but there is nothing to cross from.
    let (status, json) = record(&pool, &token, measurement("2025-03-01", 85.0)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["measurement"]["weight_kg"], 85.0);
    assert_eq!(json["data"]["goal_evaluation"]["achieved"], false);
    assert_eq!(json["data"]["goal_evaluation"]["message"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn crossing_the_main_goal_is_reported(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    create_main_goal(&pool, &token, 80.0).await;

    let (_, json) = record(&pool, &token, measurement("2025-03-01", 81.0)).await;
    assert_eq!(json["data"]["goal_evaluation"]["achieved"], false);

    let (status, json) = record(&pool, &token, measurement("2025-03-08", 79.6)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["goal_evaluation"]["achieved"], true);
    assert!(json["data"]["goal_evaluation"]["message"]
        .as_str()
        .unwrap()
        .contains("main goal of 80 kg"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn backdated_entry_compares_against_preceding_date(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    create_main_goal(&pool, &token, 80.0).await;

    record(&pool, &token, measurement("2025-03-01", 82.0)).await;
    record(&pool, &token, measurement("2025-03-10", 79.0)).await;

    // Preceded by 82.0 on 2025-03-01, not by the later 79.0.
    let (_, json) = record(&pool, &token, measurement("2025-03-05", 79.8)).await;
    assert_eq!(json["data"]["goal_evaluation"]["achieved"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn storage_failure_leaves_no_measurement_behind(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    create_main_goal(&pool, &token, 80.0).await;

    // The insert succeeds, the goal fetch after it fails.
    sqlx::query("ALTER TABLE goals RENAME TO goals_moved")
        .execute(&pool)
        .await
        .unwrap();

    let (status, json) = record(&pool, &token, measurement("2025-03-01", 81.0)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(measurement_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn latest_is_no_content_until_something_is_recorded(pool: PgPool) {
    let token = token_for(Uuid::new_v4());

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/measurements/latest", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    record(&pool, &token, measurement("2025-03-01", 82.0)).await;
    record(&pool, &token, measurement("2025-03-08", 81.4)).await;

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/measurements/latest", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["measured_on"], "2025-03-08");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn measurements_of_other_users_are_not_found(pool: PgPool) {
    let owner = token_for(Uuid::new_v4());
    let (_, json) = record(&pool, &owner, measurement("2025-03-01", 82.0)).await;
    let id = json["data"]["measurement"]["id"].as_i64().unwrap();

    let stranger = token_for(Uuid::new_v4());
    let uri = format!("/api/v1/measurements/{id}");
    let response = get_auth(build_test_app(pool.clone()), &uri, &stranger).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
