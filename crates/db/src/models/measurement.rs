//! Body measurement model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitalog_core::types::{DbId, Timestamp, UserId};

/// A row from the `measurements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measurement {
    pub id: DbId,
    pub user_id: UserId,
    pub measured_on: NaiveDate,
    pub weight_kg: f64,
    pub waist_cm: f64,
    pub belly_cm: f64,
    pub hips_cm: f64,
    pub thigh_cm: f64,
    pub created_at: Timestamp,
}

/// DTO for recording a new measurement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeasurement {
    pub measured_on: NaiveDate,
    pub weight_kg: f64,
    pub waist_cm: f64,
    pub belly_cm: f64,
    pub hips_cm: f64,
    pub thigh_cm: f64,
}

/// DTO for editing a measurement. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMeasurement {
    pub measured_on: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub belly_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub thigh_cm: Option<f64>,
}
