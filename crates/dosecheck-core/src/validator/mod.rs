//! Dose safety validation.
//!
//! Checks, in order:
//! - Weight inside the supported domain
//! - Concentration token is one of the four protocol products
//! - Concentration offered for the child's weight band
//! - Dose magnitude against the 10-15 mg/kg window
//!
//! Every check runs; findings accumulate rather than stopping at the first.

mod risk;

pub use risk::*;

use tracing::{debug, warn};

use crate::calculator::dose_range;
use crate::models::{Concentration, DoseIssue, DoseRange, DoseValidationResult};
use crate::protocol::{
    find_band, is_supported_weight, LOW_TOLERANCE_FACTOR, MAX_WEIGHT_KG, MIN_WEIGHT_KG,
    UPPER_WARNING_FRACTION,
};

/// Validate a proposed dose before it is recorded as administered.
///
/// Callers block submission only when `valid` is false; warnings are
/// informational.
pub fn validate_dose(weight_kg: f64, dose_mg: f64, concentration: &str) -> DoseValidationResult {
    let mut issues = Vec::new();

    if weight_kg.is_nan() {
        issues.push(DoseIssue::NotANumber {
            field: "weight_kg".into(),
        });
    } else if weight_kg < MIN_WEIGHT_KG {
        issues.push(DoseIssue::WeightBelowMinimum { weight_kg });
    } else if weight_kg > MAX_WEIGHT_KG {
        issues.push(DoseIssue::WeightAboveMaximum { weight_kg });
    }

    match concentration.parse::<Concentration>() {
        Ok(concentration) => {
            let offered = find_band(weight_kg).map(|band| band.doses.offers(concentration));
            if offered == Some(false) {
                issues.push(DoseIssue::ConcentrationUnavailableForWeight {
                    concentration,
                    weight_kg,
                });
            }
        }
        Err(_) => issues.push(DoseIssue::InvalidConcentration {
            token: concentration.to_string(),
        }),
    }

    let recommended_range = is_supported_weight(weight_kg).then(|| dose_range(weight_kg));

    if let Some(range) = &recommended_range {
        if dose_mg.is_nan() {
            issues.push(DoseIssue::NotANumber {
                field: "dose_mg".into(),
            });
        } else if let Some(issue) = classify_dose(dose_mg, range) {
            issues.push(issue);
        }
    }

    let result = DoseValidationResult::from_issues(issues, recommended_range);

    if result.has_issue(|issue| matches!(issue, DoseIssue::OverdoseRisk { .. })) {
        warn!(weight_kg, dose_mg, concentration, "Overdose risk detected");
    }
    debug!(
        weight_kg,
        dose_mg,
        concentration,
        severity = ?result.severity,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Dose validated"
    );

    result
}

/// Place a dose relative to the therapeutic window.
///
/// The lower edge has a 10% tolerance band that only warns; the top 10% of
/// the window also warns. Anything above the maximum is an overdose risk.
fn classify_dose(dose_mg: f64, range: &DoseRange) -> Option<DoseIssue> {
    let low_tolerance = range.min_mg * LOW_TOLERANCE_FACTOR;
    let upper_warning = range.max_mg - UPPER_WARNING_FRACTION * range.width_mg();

    if dose_mg > range.max_mg {
        Some(DoseIssue::OverdoseRisk {
            dose_mg,
            max_mg: range.max_mg,
        })
    } else if dose_mg < low_tolerance {
        Some(DoseIssue::DoseTooLow {
            dose_mg,
            min_mg: range.min_mg,
        })
    } else if dose_mg < range.min_mg {
        Some(DoseIssue::NearLowerLimit {
            dose_mg,
            min_mg: range.min_mg,
        })
    } else if dose_mg >= upper_warning {
        Some(DoseIssue::NearUpperLimit {
            dose_mg,
            max_mg: range.max_mg,
        })
    } else {
        None
    }
}
