//! Weight-banded acetaminophen dosing table.
//!
//! Values are transcribed from the childcare administration protocol chart
//! and are not derived from a formula: liquid and tablet doses are rounded
//! to what can actually be measured or split.

use serde::Serialize;

use crate::models::{Concentration, DoseEntry};
use crate::rounding::round_half_up;

use super::is_supported_weight;

/// Doses offered within one weight band, keyed by concentration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandDoses {
    #[serde(rename = "80mg/mL", skip_serializing_if = "Option::is_none")]
    pub infant_drops: Option<DoseEntry>,
    #[serde(rename = "160mg/5mL", skip_serializing_if = "Option::is_none")]
    pub childrens_syrup: Option<DoseEntry>,
    #[serde(rename = "325mg", skip_serializing_if = "Option::is_none")]
    pub tablet_325: Option<DoseEntry>,
    #[serde(rename = "500mg", skip_serializing_if = "Option::is_none")]
    pub tablet_500: Option<DoseEntry>,
}

impl BandDoses {
    /// Dose for a concentration, if the band offers it.
    pub fn get(&self, concentration: Concentration) -> Option<&DoseEntry> {
        match concentration {
            Concentration::InfantDrops => self.infant_drops.as_ref(),
            Concentration::ChildrensSyrup => self.childrens_syrup.as_ref(),
            Concentration::Tablet325 => self.tablet_325.as_ref(),
            Concentration::Tablet500 => self.tablet_500.as_ref(),
        }
    }

    /// Offered doses in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (Concentration, &DoseEntry)> + '_ {
        Concentration::ALL
            .into_iter()
            .filter_map(move |c| self.get(c).map(|entry| (c, entry)))
    }

    /// Check if the band offers a concentration.
    pub fn offers(&self, concentration: Concentration) -> bool {
        self.get(concentration).is_some()
    }
}

/// A contiguous weight interval with fixed per-concentration doses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightBand {
    /// Lower bound (inclusive)
    pub weight_min_kg: f64,
    /// Upper bound (inclusive)
    pub weight_max_kg: f64,
    /// Doses offered in this band
    pub doses: BandDoses,
}

impl WeightBand {
    /// Check if a weight falls within this band (both bounds inclusive).
    pub fn contains(&self, weight_kg: f64) -> bool {
        weight_kg >= self.weight_min_kg && weight_kg <= self.weight_max_kg
    }
}

const fn dose(mg: f64, amount: &'static str) -> Option<DoseEntry> {
    Some(DoseEntry { mg, amount })
}

const fn liquids(
    weight_min_kg: f64,
    weight_max_kg: f64,
    drops: Option<DoseEntry>,
    syrup: Option<DoseEntry>,
) -> WeightBand {
    WeightBand {
        weight_min_kg,
        weight_max_kg,
        doses: BandDoses {
            infant_drops: drops,
            childrens_syrup: syrup,
            tablet_325: None,
            tablet_500: None,
        },
    }
}

/// The protocol chart, ascending by weight.
pub static DOSING_TABLE: [WeightBand; 8] = [
    liquids(4.3, 5.4, dose(48.0, "0.6 mL"), dose(48.0, "1.5 mL")),
    liquids(5.5, 7.6, dose(80.0, "1 mL"), dose(80.0, "2.5 mL")),
    liquids(7.7, 10.7, dose(112.0, "1.4 mL"), dose(112.0, "3.5 mL")),
    liquids(10.8, 13.9, dose(128.0, "1.6 mL"), dose(128.0, "4 mL")),
    liquids(14.0, 19.9, dose(192.0, "2.4 mL"), dose(192.0, "6 mL")),
    liquids(20.0, 26.9, dose(256.0, "3.2 mL"), dose(256.0, "8 mL")),
    WeightBand {
        weight_min_kg: 27.0,
        weight_max_kg: 33.3,
        doses: BandDoses {
            infant_drops: dose(320.0, "4 mL"),
            childrens_syrup: dose(320.0, "10 mL"),
            tablet_325: dose(325.0, "1 tablet"),
            tablet_500: None,
        },
    },
    WeightBand {
        weight_min_kg: 33.4,
        weight_max_kg: 35.0,
        doses: BandDoses {
            infant_drops: dose(480.0, "6 mL"),
            childrens_syrup: dose(480.0, "15 mL"),
            tablet_325: dose(487.5, "1½ tablets"),
            tablet_500: dose(500.0, "1 tablet"),
        },
    },
];

/// Full reference table, for display as a dosing chart.
pub fn dosing_table() -> &'static [WeightBand] {
    &DOSING_TABLE
}

/// Find the band for a weight.
///
/// Bands are charted at 0.1 kg resolution, so the weight is rounded to one
/// decimal before lookup; 5.45 kg therefore resolves to the 5.5 kg band
/// instead of falling between two charted rows. Weights outside the
/// supported domain never match.
pub fn find_band(weight_kg: f64) -> Option<&'static WeightBand> {
    if !is_supported_weight(weight_kg) {
        return None;
    }
    let charted = round_half_up(weight_kg, 1);
    DOSING_TABLE.iter().find(|band| band.contains(charted))
}
