//! Deterministic decimal rounding.
//!
//! Protocol values are reported to a fixed number of decimals. Ties are
//! resolved upward (toward positive infinity), so 10.665 mg/kg style ties
//! always land on the same side regardless of how the value is displayed.

/// Round `value` to `decimals` places, ties toward positive infinity.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / factor
}

/// Round to a whole number, ties away from zero.
pub fn round_half_away_from_zero(value: f64) -> f64 {
    value.round()
}
