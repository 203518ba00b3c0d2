//! Route definitions for body measurements.

use axum::routing::get;
use axum::Router;

use crate::handlers::measurements;
use crate::state::AppState;

/// Measurement routes mounted at `/measurements`.
///
/// ```text
/// GET    /                -> list_measurements
/// POST   /                -> record_measurement
/// GET    /latest          -> latest_measurement
/// GET    /weight-history  -> weight_history
/// GET    /{id}            -> get_measurement
/// PUT    /{id}            -> update_measurement
/// DELETE /{id}            -> delete_measurement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(measurements::list_measurements).post(measurements::record_measurement),
        )
        .route("/latest", get(measurements::latest_measurement))
        .route("/weight-history", get(measurements::weight_history))
        .route(
            "/{id}",
            get(measurements::get_measurement)
                .put(measurements::update_measurement)
                .delete(measurements::delete_measurement),
        )
}
