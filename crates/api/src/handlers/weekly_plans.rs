//! Handlers for weekly meal plans (one plan per user and date).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Days, NaiveDate};
use serde::Deserialize;
use vitalog_core::error::CoreError;
use vitalog_core::types::DbId;
use vitalog_core::weekly_plan::{assign_to_week, validate_meal_text, WEEK_LENGTH_DAYS};
use vitalog_db::models::weekly_plan::{CreateWeeklyPlan, UpdateWeeklyPlan};
use vitalog_db::repositories::WeeklyPlanRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the week view.
#[derive(Debug, Deserialize)]
pub struct WeekParams {
    /// First day of the window; defaults to today (server local date).
    pub from: Option<NaiveDate>,
}

fn validate_meals<'a>(
    meals: impl IntoIterator<Item = (&'static str, Option<&'a str>)>,
) -> Result<(), CoreError> {
    for (field, text) in meals {
        if let Some(text) = text {
            validate_meal_text(field, text)?;
        }
    }
    Ok(())
}

/// GET /api/v1/weekly-plans
///
/// List all plans, latest date first.
pub async fn list_plans(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let plans = WeeklyPlanRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: plans }))
}

/// GET /api/v1/weekly-plans/current-week?from=YYYY-MM-DD
///
/// Seven consecutive days starting at `from` (or today), each with the plan
/// stored for that date or `null`.
pub async fn current_week(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> AppResult<impl IntoResponse> {
    let start = params
        .from
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let end = start
        .checked_add_days(Days::new(WEEK_LENGTH_DAYS - 1))
        .ok_or_else(|| AppError::BadRequest(format!("Week starting {start} is out of range")))?;

    let plans = WeeklyPlanRepo::list_between(&state.pool, user.user_id, start, end).await?;
    let week = assign_to_week(start, &plans, |p| p.plan_date);

    Ok(Json(DataResponse { data: week }))
}

/// GET /api/v1/weekly-plans/by-date/{date}
///
/// The plan for one date. Returns 204 when none exists.
pub async fn get_plan_by_date(
    user: AuthUser,
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<impl IntoResponse> {
    match WeeklyPlanRepo::find_by_date(&state.pool, user.user_id, date).await? {
        Some(plan) => Ok(Json(DataResponse { data: plan }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /api/v1/weekly-plans
///
/// Create the plan for a date. A second plan for the same date is a 409.
pub async fn create_plan(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWeeklyPlan>,
) -> AppResult<impl IntoResponse> {
    validate_meals([
        ("breakfast", Some(input.breakfast.as_str())),
        ("lunch", Some(input.lunch.as_str())),
        ("dinner", Some(input.dinner.as_str())),
    ])?;

    let plan = WeeklyPlanRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        user_id = %user.user_id,
        plan_id = plan.id,
        plan_date = %plan.plan_date,
        "Weekly plan created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: plan })))
}

/// PUT /api/v1/weekly-plans/{id}
pub async fn update_plan(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWeeklyPlan>,
) -> AppResult<impl IntoResponse> {
    validate_meals([
        ("breakfast", input.breakfast.as_deref()),
        ("lunch", input.lunch.as_deref()),
        ("dinner", input.dinner.as_deref()),
    ])?;

    let plan = WeeklyPlanRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("WeeklyPlan", id))?;

    tracing::info!(user_id = %user.user_id, plan_id = id, "Weekly plan updated");

    Ok(Json(DataResponse { data: plan }))
}

/// DELETE /api/v1/weekly-plans/{id}
pub async fn delete_plan(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WeeklyPlanRepo::delete(&state.pool, user.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("WeeklyPlan", id));
    }

    tracing::info!(user_id = %user.user_id, plan_id = id, "Weekly plan deleted");

    Ok(StatusCode::NO_CONTENT)
}
