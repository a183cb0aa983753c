//! Crater geometry and ground-vs-air classification.
//!
//! The crater diameter follows an energy scaling law for a vertical impact,
//! then shrinks with the angle coupling factor. Oblique impacts elongate
//! the crater rather than erase it, so the diameter keeps a floor fraction
//! of the vertical baseline.

use crate::params::ImpactParameters;
use crate::result::{CraterEffects, CraterShape};
use crate::types::PopulationDensity;

use super::zone_casualties;

/// Exponent on sin(angle) for energy coupling into the ground.
pub const ANGLE_SCALING_EXPONENT: f64 = 0.67;

/// Vertical-impact crater diameter coefficient (m / J^(1/3.4)).
pub const CRATER_SCALING_COEFFICIENT: f64 = 0.02;

/// Energy exponent of the crater scaling law.
pub const CRATER_ENERGY_EXPONENT: f64 = 1.0 / 3.4;

/// Smallest fraction of the vertical-impact diameter at grazing angles.
pub const CRATER_ANGLE_FLOOR: f64 = 0.3;

/// Depth-to-diameter ratio for a vertical impact.
pub const CRATER_DEPTH_RATIO: f64 = 0.2;

/// Blast radius in crater diameters.
pub const BLAST_RADIUS_FACTOR: f64 = 2.5;

/// Steeper than this leaves a circular crater (degrees).
pub const CIRCULAR_MIN_ANGLE_DEG: f64 = 60.0;

/// Steeper than this leaves an elliptical crater (degrees).
pub const ELLIPTICAL_MIN_ANGLE_DEG: f64 = 30.0;

/// Everyone inside the crater footprint.
pub const VAPORIZATION_FATALITY_RATE: f64 = 1.0;

/// Airburst requires a diameter below this (m).
pub const AIRBURST_MAX_DIAMETER_M: f64 = 200.0;

/// Airburst requires a speed above this (km/s).
pub const AIRBURST_MIN_SPEED_KM_S: f64 = 11.0;

/// Airburst requires an angle above this (degrees).
pub const AIRBURST_MIN_ANGLE_DEG: f64 = 15.0;

/// Ground coupling factor sin(angle)^0.67, in (0, 1] for angles in (0°, 90°].
pub fn angle_scaling(angle_rad: f64) -> f64 {
    angle_rad.sin().max(0.0).powf(ANGLE_SCALING_EXPONENT)
}

/// Diameter of the crater a vertical impact of `energy_j` would leave (m).
pub fn base_crater_diameter(energy_j: f64) -> f64 {
    CRATER_SCALING_COEFFICIENT * energy_j.powf(CRATER_ENERGY_EXPONENT)
}

/// Fraction of the vertical-impact diameter kept at the given coupling.
///
/// Equal to `0.3 + 0.7·s`, written so that `s = 1` yields exactly 1.
fn angle_diameter_fraction(angle_scaling: f64) -> f64 {
    1.0 - (1.0 - CRATER_ANGLE_FLOOR) * (1.0 - angle_scaling)
}

pub fn crater_shape(angle_deg: f64) -> CraterShape {
    if angle_deg > CIRCULAR_MIN_ANGLE_DEG {
        CraterShape::Circular
    } else if angle_deg > ELLIPTICAL_MIN_ANGLE_DEG {
        CraterShape::Elliptical
    } else {
        CraterShape::HighlyElongated
    }
}

pub fn crater_effects(
    energy_j: f64,
    angle_deg: f64,
    angle_scaling: f64,
    population: PopulationDensity,
) -> CraterEffects {
    let base_diameter_m = base_crater_diameter(energy_j);
    let diameter_m = base_diameter_m * angle_diameter_fraction(angle_scaling);

    CraterEffects {
        base_diameter_m,
        diameter_m,
        depth_m: diameter_m * CRATER_DEPTH_RATIO * angle_scaling,
        angle_scaling_percent: angle_scaling * 100.0,
        shape: crater_shape(angle_deg),
        blast_radius_m: diameter_m * BLAST_RADIUS_FACTOR,
        vaporized: zone_casualties(diameter_m / 2.0, population, VAPORIZATION_FATALITY_RATE),
    }
}

/// Small, fast, steep impactors detonate in the atmosphere.
pub fn will_airburst(params: &ImpactParameters) -> bool {
    params.diameter_m < AIRBURST_MAX_DIAMETER_M
        && params.speed_km_s > AIRBURST_MIN_SPEED_KM_S
        && params.angle_deg > AIRBURST_MIN_ANGLE_DEG
}
