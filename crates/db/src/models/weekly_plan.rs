//! Weekly meal plan model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitalog_core::types::{DbId, Timestamp, UserId};

/// A row from the `weekly_plans` table: the meals planned for one day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WeeklyPlan {
    pub id: DbId,
    pub user_id: UserId,
    pub plan_date: NaiveDate,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub created_at: Timestamp,
}

/// DTO for creating a day's plan.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWeeklyPlan {
    pub plan_date: NaiveDate,
    #[serde(default)]
    pub breakfast: String,
    #[serde(default)]
    pub lunch: String,
    #[serde(default)]
    pub dinner: String,
}

/// DTO for editing a plan. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWeeklyPlan {
    pub plan_date: Option<NaiveDate>,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}
