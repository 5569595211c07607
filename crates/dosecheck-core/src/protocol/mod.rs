//! Protocol reference data: constants and the weight-band dosing table.

mod constants;
mod table;

pub use constants::*;
pub use table::*;
