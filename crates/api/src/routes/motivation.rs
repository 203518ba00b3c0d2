//! Route definitions for the motivation program.

use axum::routing::get;
use axum::Router;

use crate::handlers::motivation;
use crate::state::AppState;

/// Motivation routes mounted at `/motivation`.
///
/// ```text
/// GET /today                -> today
/// GET /program              -> program
/// GET /day/{day}            -> get_day
/// GET /day/{day}/next       -> next_day
/// GET /day/{day}/previous   -> previous_day
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/today", get(motivation::today))
        .route("/program", get(motivation::program))
        .route("/day/{day}", get(motivation::get_day))
        .route("/day/{day}/next", get(motivation::next_day))
        .route("/day/{day}/previous", get(motivation::previous_day))
}
