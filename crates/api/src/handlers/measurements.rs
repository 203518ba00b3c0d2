//! Handlers for body measurements.
//!
//! Recording a measurement also evaluates the user's weight goals against
//! the new entry and returns the outcome alongside the stored row.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use vitalog_core::error::CoreError;
use vitalog_core::goal_evaluation::{self, GoalEvaluationResult};
use vitalog_core::goals::GoalSet;
use vitalog_core::measurements::{self, validate_girth, validate_weight};
use vitalog_core::types::DbId;
use vitalog_db::models::measurement::{CreateMeasurement, Measurement, UpdateMeasurement};
use vitalog_db::repositories::{GoalRepo, MeasurementRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of a successful `POST /measurements`.
#[derive(Debug, Serialize)]
pub struct RecordedMeasurement {
    pub measurement: Measurement,
    pub goal_evaluation: GoalEvaluationResult,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateMeasurement) -> Result<(), CoreError> {
    validate_weight(input.weight_kg)?;
    validate_girth("waist_cm", input.waist_cm)?;
    validate_girth("belly_cm", input.belly_cm)?;
    validate_girth("hips_cm", input.hips_cm)?;
    validate_girth("thigh_cm", input.thigh_cm)?;
    Ok(())
}

fn validate_update(input: &UpdateMeasurement) -> Result<(), CoreError> {
    if let Some(weight) = input.weight_kg {
        validate_weight(weight)?;
    }
    let girths = [
        ("waist_cm", input.waist_cm),
        ("belly_cm", input.belly_cm),
        ("hips_cm", input.hips_cm),
        ("thigh_cm", input.thigh_cm),
    ];
    for (field, value) in girths {
        if let Some(v) = value {
            validate_girth(field, v)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/measurements
///
/// List the user's measurements, most recent first.
pub async fn list_measurements(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = MeasurementRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/measurements/latest
///
/// The most recent measurement. Returns 204 when none has been recorded.
pub async fn latest_measurement(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    match MeasurementRepo::latest_for_user(&state.pool, user.user_id).await? {
        Some(m) => Ok(Json(DataResponse { data: m }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// GET /api/v1/measurements/weight-history
///
/// Chronological `(date, weight)` points for charting.
pub async fn weight_history(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = MeasurementRepo::list_for_user(&state.pool, user.user_id).await?;
    let points = measurements::weight_history(items.iter().map(|m| (m.measured_on, m.weight_kg)));
    Ok(Json(DataResponse { data: points }))
}

/// GET /api/v1/measurements/{id}
pub async fn get_measurement(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let measurement = MeasurementRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("Measurement", id))?;
    Ok(Json(DataResponse { data: measurement }))
}

/// POST /api/v1/measurements
///
/// Store a measurement, then evaluate the user's goals against it.
///
/// The insert, the re-listing and the goal fetch share one transaction that
/// commits only after evaluation, so a failed request leaves no row behind.
/// The previous weight is read from the refreshed list, so back-dated
/// entries compare against the entry that precedes them by date.
pub async fn record_measurement(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMeasurement>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let mut tx = state.pool.begin().await?;
    let measurement = MeasurementRepo::create(&mut *tx, user.user_id, &input).await?;
    let history = MeasurementRepo::list_for_user(&mut *tx, user.user_id).await?;
    let goals = GoalRepo::list_for_user(&mut *tx, user.user_id).await?;

    let previous = measurements::previous_weight(
        history.iter().map(|m| (m.id, m.weight_kg)),
        measurement.id,
    );
    let goal_set = GoalSet::from_targets(goals.iter().map(|g| g.target()));
    let goal_evaluation = goal_evaluation::evaluate(
        measurement.weight_kg,
        previous,
        goal_set.main.as_ref(),
        &goal_set.interim,
    );
    tx.commit().await?;

    tracing::info!(
        user_id = %user.user_id,
        measurement_id = measurement.id,
        weight_kg = measurement.weight_kg,
        goal_achieved = goal_evaluation.achieved,
        "Measurement recorded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: RecordedMeasurement {
                measurement,
                goal_evaluation,
            },
        }),
    ))
}

/// PUT /api/v1/measurements/{id}
///
/// Partially update a measurement. Goals are not re-evaluated.
pub async fn update_measurement(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeasurement>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    let measurement = MeasurementRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Measurement", id))?;

    tracing::info!(user_id = %user.user_id, measurement_id = id, "Measurement updated");

    Ok(Json(DataResponse { data: measurement }))
}

/// DELETE /api/v1/measurements/{id}
pub async fn delete_measurement(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MeasurementRepo::delete(&state.pool, user.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("Measurement", id));
    }

    tracing::info!(user_id = %user.user_id, measurement_id = id, "Measurement deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn valid_input() -> CreateMeasurement {
        CreateMeasurement {
            measured_on: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            weight_kg: 82.4,
            waist_cm: 94.0,
            belly_cm: 99.5,
            hips_cm: 104.0,
            thigh_cm: 58.0,
        }
    }

    #[test]
    fn create_accepts_plausible_values() {
        assert!(validate_create(&valid_input()).is_ok());
    }

    #[test]
    fn create_rejects_each_bad_metric() {
        let mut input = valid_input();
        input.weight_kg = 0.0;
        assert_matches!(validate_create(&input), Err(CoreError::Validation(_)));

        let mut input = valid_input();
        input.hips_cm = 301.0;
        assert_matches!(
            validate_create(&input),
            Err(CoreError::Validation(msg)) if msg.contains("hips_cm")
        );
    }

    #[test]
    fn update_checks_only_present_fields() {
        assert!(validate_update(&UpdateMeasurement::default()).is_ok());

        let input = UpdateMeasurement {
            thigh_cm: Some(f64::INFINITY),
            ..UpdateMeasurement::default()
        };
        assert_matches!(
            validate_update(&input),
            Err(CoreError::Validation(msg)) if msg.contains("thigh_cm")
        );
    }
}
