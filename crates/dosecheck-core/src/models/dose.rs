//! Dose records returned by the calculators.

use serde::{Deserialize, Serialize};

use super::Concentration;

/// A precomputed protocol dose for one concentration within a weight band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoseEntry {
    /// Milligrams of acetaminophen
    pub mg: f64,
    /// Dispensing quantity (e.g., "0.6 mL", "1 tablet")
    pub amount: &'static str,
}

/// A recommended dose resolved for a specific weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseInfo {
    /// Product the dose applies to
    pub concentration: Concentration,
    /// Milligrams of acetaminophen
    pub mg: f64,
    /// Dispensing quantity
    pub amount: String,
    /// Lower bound of the matching weight band (inclusive)
    pub weight_min_kg: f64,
    /// Upper bound of the matching weight band (inclusive)
    pub weight_max_kg: f64,
    /// Dose per kg of the child's actual weight, rounded to 2 decimals
    pub mg_per_kg: f64,
}

/// Generic 10-15 mg/kg therapeutic window for a weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseRange {
    /// Lowest therapeutic dose, rounded to 1 decimal
    pub min_mg: f64,
    /// Highest safe dose, rounded to 1 decimal
    pub max_mg: f64,
    /// Weight the window was computed for
    pub weight_kg: f64,
}

impl DoseRange {
    /// Width of the window in mg.
    pub fn width_mg(&self) -> f64 {
        self.max_mg - self.min_mg
    }

    /// Check if a dose falls inside the nominal window (inclusive).
    pub fn contains(&self, dose_mg: f64) -> bool {
        dose_mg >= self.min_mg && dose_mg <= self.max_mg
    }
}
