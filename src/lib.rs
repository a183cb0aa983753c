//! Impactor - Asteroid Impact Effects Engine
//!
//! A library crate estimating what happens when an asteroid hits a chosen
//! point on Earth: crater, fireball, shockwave, wind, earthquake, tsunami
//! and the deflection needed to avoid it all.

pub mod effects;
pub mod params;
pub mod population;
pub mod result;
pub mod scenarios;
pub mod session;
pub mod settings;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use effects::compute_impact;
pub use params::{ImpactLocation, ImpactParameters, InvalidParameterError};
pub use result::ImpactResult;
pub use types::PopulationDensity;
