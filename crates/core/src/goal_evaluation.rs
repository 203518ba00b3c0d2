//! Goal-crossing detection for newly recorded measurements.
//!
//! A goal is *crossed* when the previous measurement was strictly above its
//! target weight and the new measurement is at or below it. A goal that was
//! already met by the previous measurement is never reported again, so a
//! user below target does not get a notification on every entry.
//!
//! The main goal takes precedence. Among interim goals crossed by the same
//! update, the one with the earliest target date is reported.

use serde::Serialize;

use crate::goals::GoalTarget;

/// Date format used in goal notifications (the app's `de-DE` locale).
pub const NOTIFICATION_DATE_FORMAT: &str = "%d.%m.%Y";

/// Outcome of evaluating one new measurement against the user's goals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoalEvaluationResult {
    pub achieved: bool,
    /// Human-readable notification; empty when nothing was achieved.
    pub message: String,
}

impl GoalEvaluationResult {
    fn not_achieved() -> Self {
        Self::default()
    }

    fn achieved(message: String) -> Self {
        Self {
            achieved: true,
            message,
        }
    }
}

/// Whether moving from `previous_weight` to `new_weight` crosses `target`.
///
/// `None` for the previous weight means the new measurement is the user's
/// first, and nothing can have been crossed.
pub fn crosses(target: f64, previous_weight: Option<f64>, new_weight: f64) -> bool {
    match previous_weight {
        Some(previous) => new_weight <= target && previous > target,
        None => false,
    }
}

/// Decide whether the new measurement just reached a goal, and which one.
pub fn evaluate(
    new_weight: f64,
    previous_weight: Option<f64>,
    main_goal: Option<&GoalTarget>,
    interim_goals: &[GoalTarget],
) -> GoalEvaluationResult {
    if let Some(main) = main_goal {
        if crosses(main.target_weight_kg, previous_weight, new_weight) {
            return GoalEvaluationResult::achieved(main_goal_message(main));
        }
    }

    // `min_by_key` returns the first of equal minima, so ties keep input order.
    interim_goals
        .iter()
        .filter(|goal| crosses(goal.target_weight_kg, previous_weight, new_weight))
        .min_by_key(|goal| goal.target_date)
        .map(|goal| GoalEvaluationResult::achieved(interim_goal_message(goal)))
        .unwrap_or_else(GoalEvaluationResult::not_achieved)
}

fn main_goal_message(goal: &GoalTarget) -> String {
    format!(
        "Congratulations! You have reached your main goal of {} kg.",
        goal.target_weight_kg
    )
}

fn interim_goal_message(goal: &GoalTarget) -> String {
    format!(
        "Well done! You have reached your interim goal of {} kg (target date {}).",
        goal.target_weight_kg,
        goal.target_date.format(NOTIFICATION_DATE_FORMAT)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
