//! Route definitions for lung-function test sessions.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::lung_function;
use crate::state::AppState;

/// Lung-function routes mounted at `/lung-function`.
///
/// ```text
/// GET    /               -> list_tests
/// POST   /               -> record_test
/// GET    /protocols      -> list_protocols
/// GET    /{id}           -> get_test
/// DELETE /{id}           -> delete_test
/// PUT    /results/{id}   -> update_result
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(lung_function::list_tests).post(lung_function::record_test),
        )
        .route("/protocols", get(lung_function::list_protocols))
        .route(
            "/{id}",
            get(lung_function::get_test).delete(lung_function::delete_test),
        )
        .route("/results/{id}", put(lung_function::update_result))
}
