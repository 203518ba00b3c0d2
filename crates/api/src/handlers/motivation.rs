//! Handlers for the 30-day motivation program. Content is static; no
//! database access.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use vitalog_core::motivation;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// GET /api/v1/motivation/today
///
/// The program day for today's date (server local date).
pub async fn today(_user: AuthUser) -> AppResult<impl IntoResponse> {
    let day = motivation::day_for_date(chrono::Local::now().date_naive());
    Ok(Json(DataResponse {
        data: motivation::day(day)?,
    }))
}

/// GET /api/v1/motivation/program
pub async fn program(_user: AuthUser) -> impl IntoResponse {
    Json(DataResponse {
        data: motivation::program(),
    })
}

/// GET /api/v1/motivation/day/{day}
pub async fn get_day(_user: AuthUser, Path(day): Path<u8>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: motivation::day(day)?,
    }))
}

/// GET /api/v1/motivation/day/{day}/next
///
/// The day after `day`, wrapping from day 30 to day 1.
pub async fn next_day(_user: AuthUser, Path(day): Path<u8>) -> AppResult<impl IntoResponse> {
    motivation::day(day)?;
    Ok(Json(DataResponse {
        data: motivation::day(motivation::next_day(day))?,
    }))
}

/// GET /api/v1/motivation/day/{day}/previous
///
/// The day before `day`, wrapping from day 1 to day 30.
pub async fn previous_day(_user: AuthUser, Path(day): Path<u8>) -> AppResult<impl IntoResponse> {
    motivation::day(day)?;
    Ok(Json(DataResponse {
        data: motivation::day(motivation::previous_day(day))?,
    }))
}
