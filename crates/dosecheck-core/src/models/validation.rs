//! Validation verdict models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Concentration, DoseRange};
use crate::protocol::{MAX_WEIGHT_KG, MIN_WEIGHT_KG};

/// Overall verdict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Dose is inside the comfortable part of the window
    Safe,
    /// Dose is allowed but close to a limit
    Warning,
    /// Dose must not be administered as entered
    Error,
}

/// A single finding produced by the validator.
///
/// Blocking findings go into [`DoseValidationResult::errors`], the two
/// near-limit findings into [`DoseValidationResult::warnings`].
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DoseIssue {
    #[error("{field} is not a number")]
    NotANumber { field: String },

    #[error("Weight below minimum of {min} kg for acetaminophen dosing (got {weight_kg} kg)", min = MIN_WEIGHT_KG)]
    WeightBelowMinimum { weight_kg: f64 },

    #[error("Weight exceeds maximum of {max} kg for acetaminophen dosing (got {weight_kg} kg)", max = MAX_WEIGHT_KG)]
    WeightAboveMaximum { weight_kg: f64 },

    #[error("Invalid concentration '{token}': expected one of 80mg/mL, 160mg/5mL, 325mg, 500mg")]
    InvalidConcentration { token: String },

    #[error("Concentration {concentration} is not recommended for weight {weight_kg} kg")]
    ConcentrationUnavailableForWeight {
        concentration: Concentration,
        weight_kg: f64,
    },

    #[error("Dose too low: {dose_mg} mg is less than 90% of the minimum therapeutic dose of {min_mg} mg")]
    DoseTooLow { dose_mg: f64, min_mg: f64 },

    #[error("OVERDOSE RISK: {dose_mg} mg exceeds the maximum safe dose of {max_mg} mg")]
    OverdoseRisk { dose_mg: f64, max_mg: f64 },

    #[error("Dose of {dose_mg} mg is below the {min_mg} mg minimum, near lower limit")]
    NearLowerLimit { dose_mg: f64, min_mg: f64 },

    #[error("Dose of {dose_mg} mg is close to the {max_mg} mg maximum, near upper limit")]
    NearUpperLimit { dose_mg: f64, max_mg: f64 },
}

impl DoseIssue {
    /// Whether this finding only warns and never blocks administration.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            DoseIssue::NearLowerLimit { .. } | DoseIssue::NearUpperLimit { .. }
        )
    }
}

/// Safety verdict for a proposed dose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseValidationResult {
    /// True when no blocking finding exists
    pub valid: bool,
    /// Highest severity among findings
    pub severity: Severity,
    /// Blocking findings, in evaluation order
    pub errors: Vec<DoseIssue>,
    /// Non-blocking findings, in evaluation order
    pub warnings: Vec<DoseIssue>,
    /// Therapeutic window, present whenever the weight is in the supported domain
    pub recommended_range: Option<DoseRange>,
}

impl DoseValidationResult {
    /// Build a verdict, sorting findings into errors and warnings.
    pub fn from_issues(issues: Vec<DoseIssue>, recommended_range: Option<DoseRange>) -> Self {
        let (warnings, errors): (Vec<_>, Vec<_>) =
            issues.into_iter().partition(DoseIssue::is_warning);

        let severity = if !errors.is_empty() {
            Severity::Error
        } else if !warnings.is_empty() {
            Severity::Warning
        } else {
            Severity::Safe
        };

        Self {
            valid: errors.is_empty(),
            severity,
            errors,
            warnings,
            recommended_range,
        }
    }

    /// Human-readable error messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Human-readable warning messages.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }

    /// Check if any finding matches the predicate.
    pub fn has_issue(&self, predicate: impl Fn(&DoseIssue) -> bool) -> bool {
        self.errors.iter().chain(self.warnings.iter()).any(predicate)
    }
}
