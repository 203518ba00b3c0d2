//! Weight goal model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitalog_core::goals::{split_by_kind, GoalKind, GoalTarget};
use vitalog_core::types::{DbId, Timestamp, UserId};

/// A row from the `goals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Goal {
    pub id: DbId,
    pub user_id: UserId,
    #[sqlx(rename = "goal_kind", try_from = "i16")]
    pub kind: GoalKind,
    pub target_weight_kg: f64,
    pub target_date: NaiveDate,
    pub created_at: Timestamp,
}

impl Goal {
    /// The fields goal evaluation needs.
    pub fn target(&self) -> GoalTarget {
        GoalTarget {
            kind: self.kind,
            target_weight_kg: self.target_weight_kg,
            target_date: self.target_date,
        }
    }
}

/// DTO for creating a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoal {
    pub kind: GoalKind,
    pub target_weight_kg: f64,
    pub target_date: NaiveDate,
}

/// DTO for editing a goal. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGoal {
    pub kind: Option<GoalKind>,
    pub target_weight_kg: Option<f64>,
    pub target_date: Option<NaiveDate>,
}

/// A user's goals grouped for display.
#[derive(Debug, Clone, Serialize)]
pub struct GoalOverview {
    pub main_goal: Option<Goal>,
    /// Interim goals, earliest target date first.
    pub interim_goals: Vec<Goal>,
}

impl GoalOverview {
    pub fn from_goals(goals: Vec<Goal>) -> Self {
        let (main_goal, interim_goals) = split_by_kind(goals, |g| g.kind, |g| g.target_date);
        Self {
            main_goal,
            interim_goals,
        }
    }
}
