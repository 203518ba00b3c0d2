//! Weekly meal plan rules: meal text limits and the seven-day view.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;

/// Number of days shown in the current-week view.
pub const WEEK_LENGTH_DAYS: u64 = 7;

/// Maximum length of one meal description in characters.
pub const MAX_MEAL_TEXT_LENGTH: usize = 2_000;

/// Validate a meal description (breakfast, lunch or dinner).
pub fn validate_meal_text(field: &str, text: &str) -> Result<(), CoreError> {
    let len = text.chars().count();
    if len > MAX_MEAL_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_MEAL_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// The seven consecutive dates starting at `start`.
pub fn week_dates(start: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_LENGTH_DAYS)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

/// A day of the week view with the plan stored for that date, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekDay<P> {
    pub date: NaiveDate,
    pub plan: Option<P>,
}

/// Place stored plans onto the seven days starting at `start`.
///
/// Plans outside the window are ignored. If several plans share a date the
/// first one in `plans` is used.
pub fn assign_to_week<P, F>(start: NaiveDate, plans: &[P], date_of: F) -> Vec<WeekDay<P>>
where
    P: Clone,
    F: Fn(&P) -> NaiveDate,
{
    week_dates(start)
        .into_iter()
        .map(|date| WeekDay {
            date,
            plan: plans.iter().find(|p| date_of(p) == date).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_spans_month_end() {
        let dates = week_dates(date(2025, 1, 29));
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2025, 1, 29));
        assert_eq!(dates[3], date(2025, 2, 1));
        assert_eq!(dates[6], date(2025, 2, 4));
    }

    #[test]
    fn plans_land_on_their_day() {
        let plans = vec![
            (date(2025, 5, 6), "oats"),
            (date(2025, 5, 1), "too early"),
            (date(2025, 5, 3), "eggs"),
        ];
        let week = assign_to_week(date(2025, 5, 2), &plans, |p| p.0);

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].plan, None);
        assert_eq!(week[1].plan.map(|p| p.1), Some("eggs"));
        assert_eq!(week[4].plan.map(|p| p.1), Some("oats"));
        assert!(week.iter().all(|d| d.plan.map(|p| p.1) != Some("too early")));
    }

    #[test]
    fn meal_text_limit() {
        assert!(validate_meal_text("breakfast", "").is_ok());
        assert!(validate_meal_text("lunch", &"x".repeat(MAX_MEAL_TEXT_LENGTH)).is_ok());
        assert_matches!(
            validate_meal_text("dinner", &"x".repeat(MAX_MEAL_TEXT_LENGTH + 1)),
            Err(CoreError::Validation(msg)) if msg.contains("dinner")
        );
    }
}
