//! Quick overdose check for inline feedback while a dose is being typed.

use crate::protocol::MAX_MG_PER_KG;
use crate::rounding::round_half_away_from_zero;

/// Check if a dose exceeds the weight-scaled maximum, without a concentration.
///
/// The threshold is rounded to a whole milligram before comparing, unlike
/// [`validate_dose`](super::validate_dose) which compares against the
/// unrounded decimal maximum. At 4.3 kg the maximum is 64.5 mg: this check
/// accepts 64.8 mg while the validator flags it. The two paths are kept
/// separate until the protocol owner settles which rounding is intended.
pub fn is_overdose_risk(weight_kg: f64, dose_mg: f64) -> bool {
    let threshold = round_half_away_from_zero(weight_kg * MAX_MG_PER_KG);
    dose_mg > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_dose;

    #[test]
    fn test_threshold_rounds_to_whole_mg() {
        assert!(!is_overdose_risk(4.3, 65.0));
        assert!(is_overdose_risk(4.3, 66.0));
        assert!(!is_overdose_risk(12.0, 180.0));
        assert!(is_overdose_risk(12.0, 180.5));
    }

    #[test]
    fn test_diverges_from_validator_at_half_mg() {
        assert!(!is_overdose_risk(4.3, 64.8));

        let verdict = validate_dose(4.3, 64.8, "80mg/mL");
        assert!(!verdict.valid);
    }
}
