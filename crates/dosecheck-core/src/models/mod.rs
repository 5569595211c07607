//! Domain models for the dose validation engine.

mod concentration;
mod dose;
mod validation;

pub use concentration::*;
pub use dose::*;
pub use validation::*;
