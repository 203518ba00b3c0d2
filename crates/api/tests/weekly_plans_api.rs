//! Integration tests for weekly meal plans.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_json_auth, token_for};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../../db/migrations")]
async fn plan_by_date_is_no_content_until_created(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    let uri = "/api/v1/weekly-plans/by-date/2025-05-05";

    let response = get_auth(build_test_app(pool.clone()), uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = json!({ "plan_date": "2025-05-05", "lunch": "Lentil soup" });
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/weekly-plans", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(build_test_app(pool.clone()), uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["lunch"], "Lentil soup");
    assert_eq!(json["data"]["breakfast"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_plan_for_a_date_is_a_conflict(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    let body = json!({ "plan_date": "2025-05-06", "dinner": "Omelette" });

    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/weekly-plans", &token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/weekly-plans", &token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
