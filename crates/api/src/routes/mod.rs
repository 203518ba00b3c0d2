pub mod goals;
pub mod health;
pub mod lung_function;
pub mod measurements;
pub mod motivation;
pub mod weekly_plans;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /measurements                                    list, record
/// /measurements/latest                             most recent entry
/// /measurements/weight-history                     chart points
/// /measurements/{id}                               get, update, delete
///
/// /goals                                           list, create
/// /goals/overview                                  main + interim goals
/// /goals/{id}                                      get, update, delete
///
/// /weekly-plans                                    list, create
/// /weekly-plans/current-week                       seven-day view
/// /weekly-plans/by-date/{date}                     plan for one date
/// /weekly-plans/{id}                               update, delete
///
/// /lung-function                                   list, record
/// /lung-function/protocols                         parameter sets
/// /lung-function/{id}                              get, delete
/// /lung-function/results/{id}                      update result
///
/// /motivation/today                                today's program day
/// /motivation/program                              all 30 days
/// /motivation/day/{day}                            one day
/// /motivation/day/{day}/next                       following day
/// /motivation/day/{day}/previous                   preceding day
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/measurements", measurements::router())
        .nest("/goals", goals::router())
        .nest("/weekly-plans", weekly_plans::router())
        .nest("/lung-function", lung_function::router())
        .nest("/motivation", motivation::router())
}
