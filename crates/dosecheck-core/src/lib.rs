//! Dosecheck Core Library
//!
//! Pediatric acetaminophen dose validation for childcare health administration.
//!
//! # Architecture
//!
//! ```text
//!   Weight entered ──► calculator ──► dose choices shown to staff
//!                                          │
//!                          staff selects / types a dose
//!                                          │
//!                  ┌───────────────────────┴───────────────────────┐
//!                  ▼                                               ▼
//!      validator::is_overdose_risk                      validator::validate_dose
//!      (inline, while typing)                           (gates the saved record)
//!                                                                  │
//!                                          schedule::check_administration_schedule
//! ```
//!
//! # Core Principle
//!
//! **Verdicts are data.** Nothing here panics or returns an error for an
//! unsafe dose; every finding is reported on the result so the caller can
//! display it and decide whether to block submission.
//!
//! # Modules
//!
//! - [`protocol`]: Protocol constants and the weight-band dosing table
//! - [`models`]: Domain types (Concentration, DoseInfo, DoseValidationResult, etc.)
//! - [`calculator`]: Recommended dose lookup and the mg/kg therapeutic window
//! - [`validator`]: Dose safety verdicts and the quick overdose check
//! - [`schedule`]: Daily count and minimum interval limits

pub mod calculator;
pub mod models;
pub mod protocol;
pub mod rounding;
pub mod schedule;
pub mod validator;

// Re-export commonly used types
pub use models::{
    Concentration, DoseEntry, DoseInfo, DoseIssue, DoseRange, DoseValidationResult,
    ParseConcentrationError, Severity,
};
pub use protocol::{BandDoses, WeightBand};
pub use schedule::{ScheduleCheck, ScheduleIssue};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use chrono::{DateTime, Utc};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DoseCheckError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DoseCheckError {
    fn from(e: serde_json::Error) -> Self {
        DoseCheckError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for DoseCheckError {
    fn from(e: chrono::ParseError) -> Self {
        DoseCheckError::InvalidTimestamp(e.to_string())
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DoseCheckError> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

// =========================================================================
// Calculator Operations (exported to FFI)
// =========================================================================

/// Protocol dose for a weight and concentration token.
///
/// Returns `None` for an unknown token, an unsupported weight, or a
/// concentration the weight band does not offer.
#[uniffi::export]
pub fn calculate_recommended_dose(weight_kg: f64, concentration: String) -> Option<FfiDoseInfo> {
    let concentration = concentration.parse::<Concentration>().ok()?;
    calculator::calculate_recommended_dose(weight_kg, concentration).map(|d| d.into())
}

/// All protocol doses offered for a weight.
#[uniffi::export]
pub fn available_doses(weight_kg: f64) -> Vec<FfiDoseInfo> {
    calculator::available_doses(weight_kg)
        .into_iter()
        .map(|d| d.into())
        .collect()
}

/// The full dosing chart.
#[uniffi::export]
pub fn dosing_table() -> Vec<FfiWeightBand> {
    protocol::dosing_table().iter().map(|b| b.into()).collect()
}

/// The dosing chart as JSON, keyed by concentration token.
#[uniffi::export]
pub fn dosing_table_json() -> Result<String, DoseCheckError> {
    Ok(serde_json::to_string_pretty(protocol::dosing_table())?)
}

/// Therapeutic window for a weight.
#[uniffi::export]
pub fn dose_range(weight_kg: f64) -> FfiDoseRange {
    calculator::dose_range(weight_kg).into()
}

/// Dose per kg of body weight.
#[uniffi::export]
pub fn mg_per_kg(weight_kg: f64, dose_mg: f64) -> f64 {
    calculator::mg_per_kg(weight_kg, dose_mg)
}

// =========================================================================
// Validation Operations (exported to FFI)
// =========================================================================

/// Full safety verdict for a proposed dose.
#[uniffi::export]
pub fn validate_dose(weight_kg: f64, dose_mg: f64, concentration: String) -> FfiDoseValidationResult {
    validator::validate_dose(weight_kg, dose_mg, &concentration).into()
}

/// Quick overdose check for inline feedback.
#[uniffi::export]
pub fn is_overdose_risk(weight_kg: f64, dose_mg: f64) -> bool {
    validator::is_overdose_risk(weight_kg, dose_mg)
}

/// Check a proposed administration time (RFC 3339) against earlier ones.
#[uniffi::export]
pub fn check_administration_schedule(
    previous: Vec<String>,
    proposed: String,
) -> Result<FfiScheduleCheck, DoseCheckError> {
    let previous = previous
        .iter()
        .map(|t| parse_timestamp(t))
        .collect::<Result<Vec<_>, _>>()?;
    let proposed = parse_timestamp(&proposed)?;
    Ok(schedule::check_administration_schedule(&previous, proposed).into())
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe recommended dose.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoseInfo {
    pub concentration: String,
    pub mg: f64,
    pub amount: String,
    pub weight_min_kg: f64,
    pub weight_max_kg: f64,
    pub mg_per_kg: f64,
}

impl From<DoseInfo> for FfiDoseInfo {
    fn from(info: DoseInfo) -> Self {
        Self {
            concentration: info.concentration.token().to_string(),
            mg: info.mg,
            amount: info.amount,
            weight_min_kg: info.weight_min_kg,
            weight_max_kg: info.weight_max_kg,
            mg_per_kg: info.mg_per_kg,
        }
    }
}

/// FFI-safe band dose entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBandDose {
    pub concentration: String,
    pub mg: f64,
    pub amount: String,
}

/// FFI-safe weight band.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWeightBand {
    pub weight_min_kg: f64,
    pub weight_max_kg: f64,
    pub doses: Vec<FfiBandDose>,
}

impl From<&WeightBand> for FfiWeightBand {
    fn from(band: &WeightBand) -> Self {
        Self {
            weight_min_kg: band.weight_min_kg,
            weight_max_kg: band.weight_max_kg,
            doses: band
                .doses
                .iter()
                .map(|(concentration, entry)| FfiBandDose {
                    concentration: concentration.token().to_string(),
                    mg: entry.mg,
                    amount: entry.amount.to_string(),
                })
                .collect(),
        }
    }
}

/// FFI-safe therapeutic window.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoseRange {
    pub min_mg: f64,
    pub max_mg: f64,
    pub weight_kg: f64,
}

impl From<DoseRange> for FfiDoseRange {
    fn from(range: DoseRange) -> Self {
        Self {
            min_mg: range.min_mg,
            max_mg: range.max_mg,
            weight_kg: range.weight_kg,
        }
    }
}

/// FFI-safe verdict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiSeverity {
    Safe,
    Warning,
    Error,
}

impl From<Severity> for FfiSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Safe => FfiSeverity::Safe,
            Severity::Warning => FfiSeverity::Warning,
            Severity::Error => FfiSeverity::Error,
        }
    }
}

/// FFI-safe validation verdict.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoseValidationResult {
    pub valid: bool,
    pub severity: FfiSeverity,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommended_range: Option<FfiDoseRange>,
}

impl From<DoseValidationResult> for FfiDoseValidationResult {
    fn from(result: DoseValidationResult) -> Self {
        Self {
            valid: result.valid,
            severity: result.severity.into(),
            errors: result.error_messages(),
            warnings: result.warning_messages(),
            recommended_range: result.recommended_range.map(|r| r.into()),
        }
    }
}

/// FFI-safe schedule check.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScheduleCheck {
    pub allowed: bool,
    pub issues: Vec<String>,
    pub next_allowed_at: Option<String>,
    pub doses_in_last_24h: u32,
}

impl From<ScheduleCheck> for FfiScheduleCheck {
    fn from(check: ScheduleCheck) -> Self {
        Self {
            allowed: check.allowed,
            issues: check.issues.iter().map(|i| i.to_string()).collect(),
            next_allowed_at: check.next_allowed_at.map(|t| t.to_rfc3339()),
            doses_in_last_24h: check.doses_in_last_24h,
        }
    }
}
