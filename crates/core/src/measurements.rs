//! Body measurement validation and derived views.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Upper bound accepted for a body weight, in kilograms.
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Upper bound accepted for a circumference (waist, belly, hips, thigh), in cm.
pub const MAX_GIRTH_CM: f64 = 300.0;

/// Validate a single body metric: finite, positive, and at most `max`.
pub fn validate_metric(field: &str, value: f64, max: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive number"
        )));
    }
    if value > max {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {max}"
        )));
    }
    Ok(())
}

/// Validate a weight value.
pub fn validate_weight(weight_kg: f64) -> Result<(), CoreError> {
    validate_metric("weight_kg", weight_kg, MAX_WEIGHT_KG)
}

/// Validate a circumference value.
pub fn validate_girth(field: &str, girth_cm: f64) -> Result<(), CoreError> {
    validate_metric(field, girth_cm, MAX_GIRTH_CM)
}

/// The weight recorded immediately before measurement `new_id`.
///
/// `entries` are `(id, weight)` pairs ordered most recent first, as the
/// measurement listing returns them. Returns `None` when `new_id` is the
/// oldest entry or is not present.
pub fn previous_weight<I>(entries: I, new_id: DbId) -> Option<f64>
where
    I: IntoIterator<Item = (DbId, f64)>,
{
    let mut iter = entries.into_iter();
    iter.by_ref().find(|(id, _)| *id == new_id)?;
    iter.next().map(|(_, weight)| weight)
}

/// One point of the weight chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Turn a most-recent-first listing into chronological chart points.
pub fn weight_history<I>(entries: I) -> Vec<WeightPoint>
where
    I: IntoIterator<Item = (NaiveDate, f64)>,
{
    let mut points: Vec<WeightPoint> = entries
        .into_iter()
        .map(|(date, weight_kg)| WeightPoint { date, weight_kg })
        .collect();
    points.reverse();
    points
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn metric_bounds() {
        assert!(validate_weight(82.4).is_ok());
        assert!(validate_weight(MAX_WEIGHT_KG).is_ok());
        assert_matches!(validate_weight(0.0), Err(CoreError::Validation(_)));
        assert_matches!(validate_weight(f64::INFINITY), Err(CoreError::Validation(_)));
        assert_matches!(validate_weight(500.1), Err(CoreError::Validation(_)));
        assert!(validate_girth("waist_cm", 91.0).is_ok());
        assert_matches!(validate_girth("waist_cm", 301.0), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validation_message_names_field() {
        let err = validate_girth("thigh_cm", -1.0).unwrap_err();
        assert!(err.to_string().contains("thigh_cm"));
    }

    #[test]
    fn previous_weight_is_next_older_entry() {
        let entries = vec![(9, 80.0), (7, 81.5), (3, 83.0)];
        assert_eq!(previous_weight(entries.clone(), 9), Some(81.5));
        assert_eq!(previous_weight(entries.clone(), 7), Some(83.0));
        assert_eq!(previous_weight(entries, 3), None);
    }

    #[test]
    fn previous_weight_for_backdated_entry() {
        // A back-dated entry sits in the middle of the listing.
        let entries = vec![(1, 79.0), (12, 80.2), (2, 82.0)];
        assert_eq!(previous_weight(entries, 12), Some(82.0));
    }

    #[test]
    fn previous_weight_missing_id() {
        assert_eq!(previous_weight(vec![(1, 70.0)], 42), None);
        assert_eq!(previous_weight(Vec::new(), 1), None);
    }

    #[test]
    fn history_is_chronological() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let history = weight_history(vec![(d(20), 80.0), (d(13), 81.0), (d(6), 82.0)]);
        let dates: Vec<NaiveDate> = history.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(6), d(13), d(20)]);
        assert_eq!(history[0].weight_kg, 82.0);
    }
}
