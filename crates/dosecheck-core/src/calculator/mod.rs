//! Recommended dose lookup.
//!
//! Pipeline: weight → protocol band → per-concentration dose → mg/kg

mod range;

pub use range::*;

pub use crate::protocol::dosing_table;

use tracing::debug;

use crate::models::{Concentration, DoseEntry, DoseInfo};
use crate::protocol::{find_band, WeightBand};

/// Look up the protocol dose for a weight and concentration.
///
/// Returns `None` when the weight is outside the supported domain or when
/// the matching band does not offer the concentration.
pub fn calculate_recommended_dose(weight_kg: f64, concentration: Concentration) -> Option<DoseInfo> {
    let band = find_band(weight_kg)?;
    let entry = band.doses.get(concentration);

    debug!(
        weight_kg,
        %concentration,
        offered = entry.is_some(),
        "Recommended dose lookup"
    );

    entry.map(|entry| dose_info(band, concentration, entry, weight_kg))
}

/// All protocol doses offered for a weight, in chart order.
///
/// Empty when the weight is outside the supported domain.
pub fn available_doses(weight_kg: f64) -> Vec<DoseInfo> {
    match find_band(weight_kg) {
        Some(band) => band
            .doses
            .iter()
            .map(|(concentration, entry)| dose_info(band, concentration, entry, weight_kg))
            .collect(),
        None => Vec::new(),
    }
}

fn dose_info(
    band: &WeightBand,
    concentration: Concentration,
    entry: &DoseEntry,
    weight_kg: f64,
) -> DoseInfo {
    DoseInfo {
        concentration,
        mg: entry.mg,
        amount: entry.amount.to_string(),
        weight_min_kg: band.weight_min_kg,
        weight_max_kg: band.weight_max_kg,
        mg_per_kg: mg_per_kg(weight_kg, entry.mg),
    }
}
