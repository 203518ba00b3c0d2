//! Lung-function (spirometry) test protocols and result derivation.
//!
//! A test session records up to three attempts per parameter plus optional
//! reference rows (predicted value, lower limit of normal, percent of
//! predicted). Each parameter with at least one value becomes one stored
//! result row whose best attempt is the highest attempt value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum attempt rows per session.
pub const MAX_ATTEMPTS: usize = 3;

/// Upper bound accepted for the body height recorded with a session, in cm.
pub const MAX_HEIGHT_CM: f64 = 300.0;

pub const PARAM_FVC: &str = "FVC";
pub const PARAM_FEV1: &str = "FEV1";
pub const PARAM_FEV1_FVC: &str = "FEV1/FVC";
pub const PARAM_FEF25_75: &str = "FEF25-75%";
pub const PARAM_MEF75: &str = "MEF75";
pub const PARAM_MEF50: &str = "MEF50";
pub const PARAM_MEF25: &str = "MEF25";
pub const PARAM_PEF: &str = "PEF";
pub const PARAM_FET: &str = "FET";
pub const PARAM_FIVC: &str = "FIVC";
pub const PARAM_PIF: &str = "PIF";

/// Parameters of the full practice protocol, in display order.
pub const STANDARD_PARAMETERS: &[&str] = &[
    PARAM_FVC,
    PARAM_FEV1,
    PARAM_FEV1_FVC,
    PARAM_FEF25_75,
    PARAM_MEF75,
    PARAM_MEF50,
    PARAM_MEF25,
    PARAM_PEF,
    PARAM_FET,
    PARAM_FIVC,
    PARAM_PIF,
];

/// Parameters of the shorter hospital protocol, in display order.
pub const HOSPITAL_PARAMETERS: &[&str] = &[
    PARAM_FVC,
    PARAM_FEV1,
    PARAM_FEV1_FVC,
    PARAM_PEF,
    PARAM_MEF75,
    PARAM_MEF50,
    PARAM_MEF25,
];

/// Remark stored when a parameter only carries reference values.
pub const REMARK_REFERENCE_ONLY: &str = "reference values";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which measurement protocol a session followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Standard,
    Hospital,
}

impl Protocol {
    pub fn from_hospital_flag(hospital: bool) -> Self {
        if hospital {
            Protocol::Hospital
        } else {
            Protocol::Standard
        }
    }

    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            Protocol::Standard => STANDARD_PARAMETERS,
            Protocol::Hospital => HOSPITAL_PARAMETERS,
        }
    }
}

/// One form row: parameter name to value. `null` and missing mean "no value".
pub type ParameterValues = BTreeMap<String, Option<f64>>;

/// Everything entered for one session, before derivation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionValues {
    #[serde(default)]
    pub attempts: Vec<ParameterValues>,
    pub predicted: Option<ParameterValues>,
    pub lower_limit: Option<ParameterValues>,
    pub predicted_pct: Option<ParameterValues>,
}

/// A result row ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedResult {
    pub parameter: &'static str,
    pub attempt_1: Option<f64>,
    pub attempt_2: Option<f64>,
    pub attempt_3: Option<f64>,
    pub best_attempt: Option<f64>,
    pub predicted: Option<f64>,
    pub lower_limit: Option<f64>,
    pub predicted_pct: Option<f64>,
    pub remark: String,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Highest of the given attempt values, ignoring blanks.
pub fn best_attempt(attempts: &[Option<f64>]) -> Option<f64> {
    attempts.iter().flatten().copied().reduce(f64::max)
}

/// Remark describing how many attempts a result is based on.
pub fn attempts_remark(count: usize) -> String {
    match count {
        0 => REMARK_REFERENCE_ONLY.to_string(),
        1 => "1 attempt".to_string(),
        n => format!("{n} attempts"),
    }
}

/// Validate the raw form values against the session's protocol.
///
/// Rejects more than [`MAX_ATTEMPTS`] attempt rows, parameter names the
/// protocol does not measure, and values that are not positive and finite.
pub fn validate_session_values(protocol: Protocol, values: &SessionValues) -> Result<(), CoreError> {
    if values.attempts.len() > MAX_ATTEMPTS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_ATTEMPTS} attempts can be recorded per session"
        )));
    }

    let allowed = protocol.parameters();
    let rows = values
        .attempts
        .iter()
        .chain(values.predicted.iter())
        .chain(values.lower_limit.iter())
        .chain(values.predicted_pct.iter());

    for row in rows {
        for (name, value) in row {
            if !allowed.contains(&name.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Parameter '{name}' is not part of the {protocol:?} protocol. Must be one of: {}",
                    allowed.join(", ")
                )));
            }
            if let Some(v) = value {
                validate_result_value(name, *v)?;
            }
        }
    }
    Ok(())
}

/// A spirometry value must be a finite number above zero.
pub fn validate_result_value(name: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "Value for '{name}' must be a positive finite number"
        )));
    }
    Ok(())
}

fn value_of(row: Option<&ParameterValues>, parameter: &str) -> Option<f64> {
    row.and_then(|r| r.get(parameter).copied().flatten())
}

/// Derive the result rows to store for a session.
///
/// Attempt values are compacted in entry order, so blanks in the first row
/// do not leave gaps. Parameters without any value produce no row.
pub fn derive_results(protocol: Protocol, values: &SessionValues) -> Vec<DerivedResult> {
    protocol
        .parameters()
        .iter()
        .filter_map(|&parameter| {
            let attempts: Vec<f64> = values
                .attempts
                .iter()
                .filter_map(|row| value_of(Some(row), parameter))
                .take(MAX_ATTEMPTS)
                .collect();
            let predicted = value_of(values.predicted.as_ref(), parameter);
            let lower_limit = value_of(values.lower_limit.as_ref(), parameter);
            let predicted_pct = value_of(values.predicted_pct.as_ref(), parameter);

            if attempts.is_empty()
                && predicted.is_none()
                && lower_limit.is_none()
                && predicted_pct.is_none()
            {
                return None;
            }

            let slots: Vec<Option<f64>> = (0..MAX_ATTEMPTS).map(|i| attempts.get(i).copied()).collect();
            Some(DerivedResult {
                parameter,
                attempt_1: slots[0],
                attempt_2: slots[1],
                attempt_3: slots[2],
                best_attempt: best_attempt(&slots),
                predicted,
                lower_limit,
                predicted_pct,
                remark: attempts_remark(attempts.len()),
            })
        })
        .collect()
}
