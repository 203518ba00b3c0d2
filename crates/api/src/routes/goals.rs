//! Route definitions for weight goals.

use axum::routing::get;
use axum::Router;

use crate::handlers::goals;
use crate::state::AppState;

/// Goal routes mounted at `/goals`.
///
/// ```text
/// GET    /          -> list_goals
/// POST   /          -> create_goal
/// GET    /overview  -> goal_overview
/// GET    /{id}      -> get_goal
/// PUT    /{id}      -> update_goal
/// DELETE /{id}      -> delete_goal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goals::list_goals).post(goals::create_goal))
        .route("/overview", get(goals::goal_overview))
        .route(
            "/{id}",
            get(goals::get_goal)
                .put(goals::update_goal)
                .delete(goals::delete_goal),
        )
}
