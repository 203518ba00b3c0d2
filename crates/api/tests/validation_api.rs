//! Integration tests for request validation.
//!
//! Input is validated before the first query, so these requests are
//! answered without a database.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, offline_pool, post_json_auth, put_json_auth, token_for,
};
use serde_json::json;
use uuid::Uuid;

async fn post(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let token = token_for(Uuid::new_v4());
    let response = post_json_auth(build_test_app(offline_pool()), uri, &token, body).await;
    let status = response.status();
    (status, body_json(response).await)
}

async fn put(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let token = token_for(Uuid::new_v4());
    let response = put_json_auth(build_test_app(offline_pool()), uri, &token, body).await;
    let status = response.status();
    (status, body_json(response).await)
}

fn measurement(weight_kg: f64, waist_cm: f64) -> serde_json::Value {
    json!({
        "measured_on": "2025-03-01",
        "weight_kg": weight_kg,
        "waist_cm": waist_cm,
        "belly_cm": 95.0,
        "hips_cm": 100.0,
        "thigh_cm": 55.0
    })
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

#[tokio::test]
async fn measurement_with_zero_weight_is_rejected() {
    let (status, json) = post("/api/v1/measurements", measurement(0.0, 90.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("weight_kg"));
}

#[tokio::test]
async fn measurement_with_implausible_girth_is_rejected() {
    let (status, json) = post("/api/v1/measurements", measurement(80.0, 420.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("waist_cm"));
}

#[tokio::test]
async fn measurement_update_with_negative_weight_is_rejected() {
    let (status, json) = put("/api/v1/measurements/1", json!({ "weight_kg": -2.0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn goal_with_excessive_target_is_rejected() {
    let body = json!({ "kind": "main", "target_weight_kg": 650.0, "target_date": "2025-12-31" });
    let (status, json) = post("/api/v1/goals", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn goal_update_with_zero_target_is_rejected() {
    let (status, _) = put("/api/v1/goals/3", json!({ "target_weight_kg": 0.0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Weekly plans
// ---------------------------------------------------------------------------

#[tokio::test]
async fn overlong_meal_text_is_rejected() {
    let body = json!({ "plan_date": "2025-05-05", "lunch": "x".repeat(2_001) });
    let (status, json) = post("/api/v1/weekly-plans", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("lunch"));
}

// ---------------------------------------------------------------------------
// Lung function
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hospital_session_with_standard_only_parameter_is_rejected() {
    let body = json!({
        "tested_on": "2025-04-10",
        "hospital_protocol": true,
        "values": { "attempts": [ { "FVC": 3.9, "FET": 6.1 } ] }
    });
    let (status, json) = post("/api/v1/lung-function", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("FET"));
}

#[tokio::test]
async fn session_with_four_attempts_is_rejected() {
    let body = json!({
        "tested_on": "2025-04-10",
        "values": { "attempts": [ {}, {}, {}, {} ] }
    });
    let (status, json) = post("/api/v1/lung-function", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn result_edit_with_non_positive_attempt_is_rejected() {
    let body = json!({ "attempt_1": -1.0, "attempt_2": null });
    let (status, json) = put("/api/v1/lung-function/results/1", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("attempt_1"));
}
