//! Handlers for lung-function (spirometry) test sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitalog_core::error::CoreError;
use vitalog_core::lung_function::{
    derive_results, validate_result_value, validate_session_values, Protocol, MAX_HEIGHT_CM,
};
use vitalog_core::measurements::{validate_metric, validate_weight};
use vitalog_core::types::DbId;
use vitalog_db::models::lung_function::{CreateLungFunctionTest, UpdateLungFunctionResult};
use vitalog_db::repositories::LungFunctionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_session(input: &CreateLungFunctionTest) -> Result<Protocol, CoreError> {
    if let Some(height) = input.height_cm {
        validate_metric("height_cm", height, MAX_HEIGHT_CM)?;
    }
    if let Some(weight) = input.weight_kg {
        validate_weight(weight)?;
    }
    let protocol = Protocol::from_hospital_flag(input.hospital_protocol);
    validate_session_values(protocol, &input.values)?;
    Ok(protocol)
}

fn validate_result_update(input: &UpdateLungFunctionResult) -> Result<(), CoreError> {
    for (field, value) in input.provided_values() {
        validate_result_value(field, value)?;
    }
    Ok(())
}

/// GET /api/v1/lung-function/protocols
///
/// Parameter names measured by each protocol, in display order.
pub async fn list_protocols(_user: AuthUser) -> impl IntoResponse {
    Json(DataResponse {
        data: serde_json::json!({
            "standard": Protocol::Standard.parameters(),
            "hospital": Protocol::Hospital.parameters(),
        }),
    })
}

/// GET /api/v1/lung-function
///
/// List sessions with their results, latest test date first.
pub async fn list_tests(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tests = LungFunctionRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: tests }))
}

/// GET /api/v1/lung-function/{id}
pub async fn get_test(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let test = LungFunctionRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("LungFunctionTest", id))?;
    Ok(Json(DataResponse { data: test }))
}

/// POST /api/v1/lung-function
///
/// Record a session. One result row is derived per parameter that has at
/// least one value; session and results are stored in one transaction.
pub async fn record_test(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateLungFunctionTest>,
) -> AppResult<impl IntoResponse> {
    let protocol = validate_session(&input)?;
    let results = derive_results(protocol, &input.values);

    let test =
        LungFunctionRepo::create_with_results(&state.pool, user.user_id, &input, &results).await?;

    tracing::info!(
        user_id = %user.user_id,
        test_id = test.test.id,
        protocol = ?protocol,
        result_count = test.results.len(),
        "Lung function test recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: test })))
}

/// PUT /api/v1/lung-function/results/{id}
///
/// Edit one result row. An explicit `null` clears a value; the best attempt
/// and remark are recomputed from the resulting attempts.
pub async fn update_result(
    user: AuthUser,
    State(state): State<AppState>,
    Path(result_id): Path<DbId>,
    Json(input): Json<UpdateLungFunctionResult>,
) -> AppResult<impl IntoResponse> {
    validate_result_update(&input)?;

    let result = LungFunctionRepo::update_result(&state.pool, user.user_id, result_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("LungFunctionResult", result_id))?;

    tracing::info!(
        user_id = %user.user_id,
        result_id,
        parameter = %result.parameter,
        "Lung function result updated",
    );

    Ok(Json(DataResponse { data: result }))
}

/// DELETE /api/v1/lung-function/{id}
///
/// Delete a session together with its results.
pub async fn delete_test(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = LungFunctionRepo::delete(&state.pool, user.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("LungFunctionTest", id));
    }

    tracing::info!(user_id = %user.user_id, test_id = id, "Lung function test deleted");

    Ok(StatusCode::NO_CONTENT)
}
