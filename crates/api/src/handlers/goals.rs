//! Handlers for weight goals.
//!
//! A user owns at most one main goal. The handlers check this before
//! writing; the partial unique index `uq_goals_main_per_user` catches the
//! concurrent case and surfaces as 409 as well.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitalog_core::goals::{ensure_single_main_goal, validate_target_weight, GoalKind};
use vitalog_core::types::DbId;
use vitalog_db::models::goal::{CreateGoal, GoalOverview, UpdateGoal};
use vitalog_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/goals
///
/// List all goals, main goal first, then by target date.
pub async fn list_goals(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let goals = GoalRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: goals }))
}

/// GET /api/v1/goals/overview
///
/// The main goal and the date-ordered interim goals.
pub async fn goal_overview(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let goals = GoalRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse {
        data: GoalOverview::from_goals(goals),
    }))
}

/// GET /api/v1/goals/{id}
pub async fn get_goal(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or_else(|| AppError::not_found("Goal", id))?;
    Ok(Json(DataResponse { data: goal }))
}

/// POST /api/v1/goals
///
/// Create a goal. A second main goal is rejected with 409.
pub async fn create_goal(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGoal>,
) -> AppResult<impl IntoResponse> {
    validate_target_weight(input.target_weight_kg)?;

    if input.kind == GoalKind::Main {
        let main_exists = GoalRepo::main_goal_exists(&state.pool, user.user_id, None).await?;
        ensure_single_main_goal(input.kind, main_exists)?;
    }

    let goal = GoalRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        user_id = %user.user_id,
        goal_id = goal.id,
        kind = ?goal.kind,
        target_weight_kg = goal.target_weight_kg,
        "Goal created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: goal })))
}

/// PUT /api/v1/goals/{id}
///
/// Partially update a goal. Turning it into the main goal follows the same
/// single-main rule as creation.
pub async fn update_goal(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGoal>,
) -> AppResult<impl IntoResponse> {
    if let Some(weight) = input.target_weight_kg {
        validate_target_weight(weight)?;
    }

    if input.kind == Some(GoalKind::Main) {
        let main_exists = GoalRepo::main_goal_exists(&state.pool, user.user_id, Some(id)).await?;
        ensure_single_main_goal(GoalKind::Main, main_exists)?;
    }

    let goal = GoalRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Goal", id))?;

    tracing::info!(user_id = %user.user_id, goal_id = id, "Goal updated");

    Ok(Json(DataResponse { data: goal }))
}

/// DELETE /api/v1/goals/{id}
pub async fn delete_goal(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GoalRepo::delete(&state.pool, user.user_id, id).await?;
    if !deleted {
        return Err(AppError::not_found("Goal", id));
    }

    tracing::info!(user_id = %user.user_id, goal_id = id, "Goal deleted");

    Ok(StatusCode::NO_CONTENT)
}
