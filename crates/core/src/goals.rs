//! Weight goal kinds, validation, and grouping.
//!
//! A user has at most one main goal (the overall target weight) and any
//! number of interim goals (milestones with a target date). Goal kinds are
//! stored as small integers in the `goals.goal_kind` column.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Database code for an interim goal.
pub const GOAL_KIND_INTERIM: i16 = 1;

/// Database code for the main goal.
pub const GOAL_KIND_MAIN: i16 = 2;

/// Upper bound accepted for any target weight, in kilograms.
pub const MAX_TARGET_WEIGHT_KG: f64 = 500.0;

// ---------------------------------------------------------------------------
// Goal kind
// ---------------------------------------------------------------------------

/// Whether a goal is the user's single main goal or one of the interim goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Interim,
    Main,
}

impl GoalKind {
    /// The integer stored in `goals.goal_kind`.
    pub fn code(self) -> i16 {
        match self {
            GoalKind::Interim => GOAL_KIND_INTERIM,
            GoalKind::Main => GOAL_KIND_MAIN,
        }
    }

    /// Parse a stored `goal_kind` code.
    pub fn from_code(code: i16) -> Result<Self, CoreError> {
        match code {
            GOAL_KIND_INTERIM => Ok(GoalKind::Interim),
            GOAL_KIND_MAIN => Ok(GoalKind::Main),
            other => Err(CoreError::Internal(format!(
                "Unknown goal kind code {other}"
            ))),
        }
    }
}

impl TryFrom<i16> for GoalKind {
    type Error = CoreError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        GoalKind::from_code(code)
    }
}

// ---------------------------------------------------------------------------
// Goal targets
// ---------------------------------------------------------------------------

/// The part of a stored goal that goal evaluation cares about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalTarget {
    pub kind: GoalKind,
    pub target_weight_kg: f64,
    pub target_date: NaiveDate,
}

/// A user's goals split into the main goal and the date-ordered interim goals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalSet {
    pub main: Option<GoalTarget>,
    pub interim: Vec<GoalTarget>,
}

impl GoalSet {
    /// Group goal targets by kind, see [`split_by_kind`].
    pub fn from_targets(targets: impl IntoIterator<Item = GoalTarget>) -> Self {
        let (main, interim) = split_by_kind(targets, |g| g.kind, |g| g.target_date);
        Self { main, interim }
    }
}

/// Split goals into the main goal and the interim goals.
///
/// The first main goal encountered wins; any further main goal is dropped.
/// Interim goals are sorted by target date, goals sharing a date keep their
/// input order.
pub fn split_by_kind<G, K, D>(
    goals: impl IntoIterator<Item = G>,
    kind_of: K,
    date_of: D,
) -> (Option<G>, Vec<G>)
where
    K: Fn(&G) -> GoalKind,
    D: Fn(&G) -> NaiveDate,
{
    let mut main = None;
    let mut interim = Vec::new();
    for goal in goals {
        match kind_of(&goal) {
            GoalKind::Main if main.is_none() => main = Some(goal),
            GoalKind::Main => {}
            GoalKind::Interim => interim.push(goal),
        }
    }
    interim.sort_by_key(|g| date_of(g));
    (main, interim)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a goal's target weight: finite, positive, and within bounds.
pub fn validate_target_weight(weight_kg: f64) -> Result<(), CoreError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CoreError::Validation(
            "Target weight must be a positive number".to_string(),
        ));
    }
    if weight_kg > MAX_TARGET_WEIGHT_KG {
        return Err(CoreError::Validation(format!(
            "Target weight must not exceed {MAX_TARGET_WEIGHT_KG} kg"
        )));
    }
    Ok(())
}

/// Reject a write that would give the user a second main goal.
///
/// `main_exists` reports whether the user already has a main goal other
/// than the one being written.
pub fn ensure_single_main_goal(kind: GoalKind, main_exists: bool) -> Result<(), CoreError> {
    if kind == GoalKind::Main && main_exists {
        return Err(CoreError::Conflict(
            "Only one main goal is allowed".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
