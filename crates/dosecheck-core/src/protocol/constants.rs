// Protocol parameters for acetaminophen administration in childcare.

/// Lightest child covered by the dosing table (kg).
pub const MIN_WEIGHT_KG: f64 = 4.3;
/// Heaviest child covered by the dosing table (kg).
pub const MAX_WEIGHT_KG: f64 = 35.0;

/// Lower edge of the therapeutic window (mg per kg).
pub const MIN_MG_PER_KG: f64 = 10.0;
/// Upper edge of the therapeutic window (mg per kg).
pub const MAX_MG_PER_KG: f64 = 15.0;

/// Maximum administrations in any 24 hour window.
pub const MAX_DAILY_DOSES: u32 = 5;
/// Minimum spacing between two administrations (hours).
pub const MIN_INTERVAL_HOURS: u32 = 4;

/// Fraction of the minimum dose below which a dose is rejected as too low.
pub const LOW_TOLERANCE_FACTOR: f64 = 0.9;
/// Share of the window width, measured down from the maximum, that triggers a warning.
pub const UPPER_WARNING_FRACTION: f64 = 0.10;

/// Resolution of the weight bands (kg).
pub const BAND_STEP_KG: f64 = 0.1;

/// Whether a weight lies inside the supported domain (inclusive).
pub fn is_supported_weight(weight_kg: f64) -> bool {
    (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg)
}
