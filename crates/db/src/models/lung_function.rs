//! Lung-function test session and result models.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use vitalog_core::lung_function::{attempts_remark, best_attempt, SessionValues};
use vitalog_core::types::{DbId, Timestamp, UserId};

/// A row from the `lung_function_tests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LungFunctionTest {
    pub id: DbId,
    pub user_id: UserId,
    pub tested_on: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub overall_predicted_pct: Option<f64>,
    pub hospital_protocol: bool,
    pub created_at: Timestamp,
}

/// A row from the `lung_function_results` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LungFunctionResult {
    pub id: DbId,
    pub test_id: DbId,
    pub parameter: String,
    pub attempt_1: Option<f64>,
    pub attempt_2: Option<f64>,
    pub attempt_3: Option<f64>,
    pub best_attempt: Option<f64>,
    pub predicted: Option<f64>,
    pub lower_limit: Option<f64>,
    pub predicted_pct: Option<f64>,
    pub remark: String,
    pub created_at: Timestamp,
}

/// A session together with its results.
#[derive(Debug, Clone, Serialize)]
pub struct LungFunctionTestWithResults {
    #[serde(flatten)]
    pub test: LungFunctionTest,
    pub results: Vec<LungFunctionResult>,
}

/// DTO for recording a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLungFunctionTest {
    pub tested_on: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub overall_predicted_pct: Option<f64>,
    #[serde(default)]
    pub hospital_protocol: bool,
    #[serde(default)]
    pub values: SessionValues,
}

/// DTO for editing one result.
///
/// Each field has three states: absent leaves the column unchanged, `null`
/// clears it, and a number replaces it. The best attempt and the remark are
/// recomputed from the resulting attempts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLungFunctionResult {
    #[serde(default, deserialize_with = "nullable")]
    pub attempt_1: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub attempt_2: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub attempt_3: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub predicted: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub lower_limit: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub predicted_pct: Option<Option<f64>>,
}

/// A present field, `null` included, deserializes to `Some`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

impl UpdateLungFunctionResult {
    /// Every value the edit sets, named by column. Cleared fields are skipped.
    pub fn provided_values(&self) -> Vec<(&'static str, f64)> {
        [
            ("attempt_1", self.attempt_1),
            ("attempt_2", self.attempt_2),
            ("attempt_3", self.attempt_3),
            ("predicted", self.predicted),
            ("lower_limit", self.lower_limit),
            ("predicted_pct", self.predicted_pct),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.flatten().map(|v| (name, v)))
        .collect()
    }

    /// Apply the edit to a stored row, recomputing the derived columns.
    pub fn apply_to(&self, current: &LungFunctionResult) -> LungFunctionResult {
        let pick = |edit: Option<Option<f64>>, stored: Option<f64>| edit.unwrap_or(stored);

        let attempts = [
            pick(self.attempt_1, current.attempt_1),
            pick(self.attempt_2, current.attempt_2),
            pick(self.attempt_3, current.attempt_3),
        ];
        let attempt_count = attempts.iter().flatten().count();

        LungFunctionResult {
            attempt_1: attempts[0],
            attempt_2: attempts[1],
            attempt_3: attempts[2],
            best_attempt: best_attempt(&attempts),
            predicted: pick(self.predicted, current.predicted),
            lower_limit: pick(self.lower_limit, current.lower_limit),
            predicted_pct: pick(self.predicted_pct, current.predicted_pct),
            remark: attempts_remark(attempt_count),
            ..current.clone()
        }
    }
}
