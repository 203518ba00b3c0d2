//! Route definitions for weekly meal plans.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::weekly_plans;
use crate::state::AppState;

/// Weekly plan routes mounted at `/weekly-plans`.
///
/// ```text
/// GET    /                -> list_plans
/// POST   /                -> create_plan
/// GET    /current-week    -> current_week
/// GET    /by-date/{date}  -> get_plan_by_date
/// PUT    /{id}            -> update_plan
/// DELETE /{id}            -> delete_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(weekly_plans::list_plans).post(weekly_plans::create_plan),
        )
        .route("/current-week", get(weekly_plans::current_week))
        .route("/by-date/{date}", get(weekly_plans::get_plan_by_date))
        .route(
            "/{id}",
            put(weekly_plans::update_plan).delete(weekly_plans::delete_plan),
        )
}
