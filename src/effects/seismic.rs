//! Impact-induced ground shaking.

use crate::result::EarthquakeEffects;
use crate::types::PopulationDensity;

use super::zone_casualties;

/// Magnitude per decade of impact energy.
pub const MAGNITUDE_PER_ENERGY_DECADE: f64 = 0.67;
/// Magnitude offset of the energy-magnitude relation.
pub const MAGNITUDE_OFFSET: f64 = 5.87;
/// Felt radius at magnitude 0 (m).
pub const FELT_RADIUS_COEFF_M: f64 = 1_000.0;
/// Felt radius grows by 10^(0.5·M).
pub const FELT_RADIUS_MAGNITUDE_EXPONENT: f64 = 0.5;
pub const EARTHQUAKE_FATALITY_RATE: f64 = 0.001;

/// Richter-equivalent magnitude: M = 0.67·log10(E) − 5.87.
pub fn seismic_magnitude(energy_j: f64) -> f64 {
    MAGNITUDE_PER_ENERGY_DECADE * energy_j.log10() - MAGNITUDE_OFFSET
}

pub fn earthquake_effects(energy_j: f64, population: PopulationDensity) -> EarthquakeEffects {
    let magnitude = seismic_magnitude(energy_j);
    let felt_radius_m = FELT_RADIUS_COEFF_M * 10f64.powf(FELT_RADIUS_MAGNITUDE_EXPONENT * magnitude);

    EarthquakeEffects {
        magnitude,
        felt_radius_m,
        deaths: zone_casualties(felt_radius_m, population, EARTHQUAKE_FATALITY_RATE),
    }
}
