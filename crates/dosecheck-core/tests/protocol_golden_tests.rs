//! Golden tests for the dosing protocol.
//!
//! These tests pin lookups and verdicts against known chart values.

use dosecheck_core::calculator::{available_doses, calculate_recommended_dose};
use dosecheck_core::models::{Concentration, DoseIssue, Severity};
use dosecheck_core::validator::{is_overdose_risk, validate_dose};

/// Recommended dose case.
struct LookupCase {
    id: &'static str,
    weight_kg: f64,
    concentration: Concentration,
    expected_mg: f64,
    expected_amount: &'static str,
    expected_band: (f64, f64),
}

fn get_lookup_cases() -> Vec<LookupCase> {
    vec![
        LookupCase {
            id: "drops-lightest",
            weight_kg: 4.5,
            concentration: Concentration::InfantDrops,
            expected_mg: 48.0,
            expected_amount: "0.6 mL",
            expected_band: (4.3, 5.4),
        },
        LookupCase {
            id: "syrup-lightest",
            weight_kg: 4.3,
            concentration: Concentration::ChildrensSyrup,
            expected_mg: 48.0,
            expected_amount: "1.5 mL",
            expected_band: (4.3, 5.4),
        },
        LookupCase {
            id: "drops-infant",
            weight_kg: 6.8,
            concentration: Concentration::InfantDrops,
            expected_mg: 80.0,
            expected_amount: "1 mL",
            expected_band: (5.5, 7.6),
        },
        LookupCase {
            id: "syrup-toddler",
            weight_kg: 12.0,
            concentration: Concentration::ChildrensSyrup,
            expected_mg: 128.0,
            expected_amount: "4 mL",
            expected_band: (10.8, 13.9),
        },
        LookupCase {
            id: "syrup-preschool",
            weight_kg: 16.0,
            concentration: Concentration::ChildrensSyrup,
            expected_mg: 192.0,
            expected_amount: "6 mL",
            expected_band: (14.0, 19.9),
        },
        LookupCase {
            id: "syrup-school-age",
            weight_kg: 23.0,
            concentration: Concentration::ChildrensSyrup,
            expected_mg: 256.0,
            expected_amount: "8 mL",
            expected_band: (20.0, 26.9),
        },
        LookupCase {
            id: "tablet-325",
            weight_kg: 30.0,
            concentration: Concentration::Tablet325,
            expected_mg: 325.0,
            expected_amount: "1 tablet",
            expected_band: (27.0, 33.3),
        },
        LookupCase {
            id: "tablet-500-heaviest",
            weight_kg: 35.0,
            concentration: Concentration::Tablet500,
            expected_mg: 500.0,
            expected_amount: "1 tablet",
            expected_band: (33.4, 35.0),
        },
    ]
}

#[test]
fn test_lookup_golden_cases() {
    for case in get_lookup_cases() {
        let info = calculate_recommended_dose(case.weight_kg, case.concentration)
            .unwrap_or_else(|| panic!("Case {}: no dose returned", case.id));

        assert_eq!(info.mg, case.expected_mg, "Case {}: mg mismatch", case.id);
        assert_eq!(
            info.amount, case.expected_amount,
            "Case {}: amount mismatch",
            case.id
        );
        assert_eq!(
            (info.weight_min_kg, info.weight_max_kg),
            case.expected_band,
            "Case {}: band mismatch",
            case.id
        );
    }
}

/// Validation verdict case.
struct VerdictCase {
    id: &'static str,
    weight_kg: f64,
    dose_mg: f64,
    concentration: &'static str,
    expected_valid: bool,
    expected_severity: Severity,
}

fn get_verdict_cases() -> Vec<VerdictCase> {
    vec![
        VerdictCase {
            id: "toddler-safe",
            weight_kg: 12.0,
            dose_mg: 140.0,
            concentration: "160mg/5mL",
            expected_valid: true,
            expected_severity: Severity::Safe,
        },
        VerdictCase {
            id: "toddler-overdose",
            weight_kg: 12.0,
            dose_mg: 200.0,
            concentration: "160mg/5mL",
            expected_valid: false,
            expected_severity: Severity::Error,
        },
        VerdictCase {
            id: "toddler-chart-dose",
            weight_kg: 12.0,
            dose_mg: 128.0,
            concentration: "160mg/5mL",
            expected_valid: true,
            expected_severity: Severity::Safe,
        },
        VerdictCase {
            id: "infant-near-lower",
            weight_kg: 5.0,
            dose_mg: 48.0,
            concentration: "80mg/mL",
            expected_valid: true,
            expected_severity: Severity::Warning,
        },
        VerdictCase {
            id: "infant-too-low",
            weight_kg: 5.0,
            dose_mg: 40.0,
            concentration: "80mg/mL",
            expected_valid: false,
            expected_severity: Severity::Error,
        },
        VerdictCase {
            id: "heaviest-tablet-near-upper",
            weight_kg: 33.4,
            dose_mg: 500.0,
            concentration: "500mg",
            expected_valid: true,
            expected_severity: Severity::Warning,
        },
        VerdictCase {
            id: "tablet-for-toddler",
            weight_kg: 12.0,
            dose_mg: 140.0,
            concentration: "325mg",
            expected_valid: false,
            expected_severity: Severity::Error,
        },
        VerdictCase {
            id: "under-weight-bad-token",
            weight_kg: 3.0,
            dose_mg: 300.0,
            concentration: "invalid-token",
            expected_valid: false,
            expected_severity: Severity::Error,
        },
    ]
}

#[test]
fn test_verdict_golden_cases() {
    for case in get_verdict_cases() {
        let result = validate_dose(case.weight_kg, case.dose_mg, case.concentration);

        assert_eq!(
            result.valid, case.expected_valid,
            "Case {}: validity mismatch, errors: {:?}",
            case.id, result.errors
        );
        assert_eq!(
            result.severity, case.expected_severity,
            "Case {}: severity mismatch",
            case.id
        );
    }
}

#[test]
fn test_under_weight_bad_token_reports_both() {
    let result = validate_dose(3.0, 300.0, "invalid-token");

    assert!(result
        .errors
        .iter()
        .any(|e| matches!(e, DoseIssue::WeightBelowMinimum { .. })));
    assert!(result
        .errors
        .iter()
        .any(|e| matches!(e, DoseIssue::InvalidConcentration { .. })));
}

#[test]
fn test_overdose_message() {
    let result = validate_dose(12.0, 200.0, "160mg/5mL");
    let messages = result.error_messages();

    assert!(messages.iter().any(|m| m.contains("OVERDOSE RISK")));
}

#[test]
fn test_quick_overdose_check() {
    let cases = vec![
        (4.3, 65.0, false),
        (4.3, 66.0, true),
        (12.0, 180.0, false),
        (12.0, 181.0, true),
        (35.0, 525.0, false),
        (35.0, 526.0, true),
    ];

    for (weight, dose, expected) in cases {
        assert_eq!(
            is_overdose_risk(weight, dose),
            expected,
            "is_overdose_risk({}, {}) should be {}",
            weight,
            dose,
            expected
        );
    }
}

#[test]
fn test_available_doses_per_band() {
    let expected_counts = vec![
        (4.3, 2),
        (7.0, 2),
        (9.0, 2),
        (12.0, 2),
        (18.0, 2),
        (25.0, 2),
        (30.0, 3),
        (34.0, 4),
    ];

    for (weight, count) in expected_counts {
        assert_eq!(
            available_doses(weight).len(),
            count,
            "Weight {} should offer {} concentrations",
            weight,
            count
        );
    }
}
