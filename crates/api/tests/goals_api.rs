//! Integration tests for the single-main-goal rule.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_json_auth, put_json_auth, token_for};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

fn goal(kind: &str, target_weight_kg: f64, target_date: &str) -> serde_json::Value {
    json!({
        "kind": kind,
        "target_weight_kg": target_weight_kg,
        "target_date": target_date
    })
}

async fn create(
    pool: &PgPool,
    token: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/goals", token, body).await;
    let status = response.status();
    (status, body_json(response).await)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_main_goal_is_a_conflict(pool: PgPool) {
    let token = token_for(Uuid::new_v4());

    let (status, _) = create(&pool, &token, goal("main", 78.0, "2025-12-31")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = create(&pool, &token, goal("main", 75.0, "2026-06-30")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn main_goals_of_different_users_do_not_conflict(pool: PgPool) {
    for target in [78.0, 70.0] {
        let token = token_for(Uuid::new_v4());
        let (status, _) = create(&pool, &token, goal("main", target, "2025-12-31")).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn promoting_interim_to_second_main_is_a_conflict(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    let (_, json) = create(&pool, &token, goal("main", 78.0, "2025-12-31")).await;
    let main_id = json["data"]["id"].as_i64().unwrap();
    let (_, json) = create(&pool, &token, goal("interim", 82.0, "2025-06-30")).await;
    let interim_id = json["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/goals/{interim_id}");
    let app = build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, &token, json!({ "kind": "main" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    // The existing main goal does not conflict with itself.
    let uri = format!("/api/v1/goals/{main_id}");
    let body = json!({ "kind": "main", "target_weight_kg": 77.0 });
    let response = put_json_auth(build_test_app(pool.clone()), &uri, &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["target_weight_kg"], 77.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overview_splits_main_and_interim(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    create(&pool, &token, goal("interim", 80.0, "2025-09-30")).await;
    create(&pool, &token, goal("main", 78.0, "2025-12-31")).await;
    create(&pool, &token, goal("interim", 82.0, "2025-06-30")).await;

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/goals/overview", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["main_goal"]["target_weight_kg"], 78.0);
    let interim = json["data"]["interim_goals"].as_array().unwrap();
    assert_eq!(interim.len(), 2);
    assert_eq!(interim[0]["target_date"], "2025-06-30");
}
