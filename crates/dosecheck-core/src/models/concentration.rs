//! Acetaminophen product concentrations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A commercial acetaminophen formulation covered by the protocol.
///
/// The set is closed: any token other than the four below is rejected by
/// [`Concentration::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Concentration {
    /// Infant drops, 80 mg per mL
    #[serde(rename = "80mg/mL")]
    InfantDrops,
    /// Children's syrup, 160 mg per 5 mL
    #[serde(rename = "160mg/5mL")]
    ChildrensSyrup,
    /// 325 mg tablet
    #[serde(rename = "325mg")]
    Tablet325,
    /// 500 mg tablet
    #[serde(rename = "500mg")]
    Tablet500,
}

impl Concentration {
    /// All concentrations, in reference-chart order.
    pub const ALL: [Concentration; 4] = [
        Concentration::InfantDrops,
        Concentration::ChildrensSyrup,
        Concentration::Tablet325,
        Concentration::Tablet500,
    ];

    /// The protocol token for this concentration (e.g. `"160mg/5mL"`).
    pub fn token(&self) -> &'static str {
        match self {
            Concentration::InfantDrops => "80mg/mL",
            Concentration::ChildrensSyrup => "160mg/5mL",
            Concentration::Tablet325 => "325mg",
            Concentration::Tablet500 => "500mg",
        }
    }

    /// Whether the product is dispensed by volume rather than by tablet.
    pub fn is_liquid(&self) -> bool {
        matches!(
            self,
            Concentration::InfantDrops | Concentration::ChildrensSyrup
        )
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Token did not name one of the four supported concentrations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown concentration token: {0}")]
pub struct ParseConcentrationError(pub String);

impl FromStr for Concentration {
    type Err = ParseConcentrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Tokens are matched exactly; "80mg/ml" is not a protocol token.
        Concentration::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| ParseConcentrationError(s.to_string()))
    }
}
