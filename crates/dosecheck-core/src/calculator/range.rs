//! Concentration-independent therapeutic window.

use crate::models::DoseRange;
use crate::protocol::{MAX_MG_PER_KG, MIN_MG_PER_KG};
use crate::rounding::round_half_up;

/// The 10-15 mg/kg window for a weight, rounded to 1 decimal.
pub fn dose_range(weight_kg: f64) -> DoseRange {
    DoseRange {
        min_mg: round_half_up(weight_kg * MIN_MG_PER_KG, 1),
        max_mg: round_half_up(weight_kg * MAX_MG_PER_KG, 1),
        weight_kg,
    }
}

/// Dose per kg of body weight, rounded to 2 decimals.
///
/// Returns 0 for a zero or negative weight.
pub fn mg_per_kg(weight_kg: f64, dose_mg: f64) -> f64 {
    if weight_kg <= 0.0 {
        return 0.0;
    }
    round_half_up(dose_mg / weight_kg, 2)
}
