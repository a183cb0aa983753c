//! Tsunami estimate for ocean impacts.
//!
//! Only evaluated when the site reads as ocean and the yield clears a
//! minimum. The impact point has no residents, so coastal casualties use a
//! fixed coastal density instead of the resolved one.

use std::f64::consts::TAU;

use crate::result::TsunamiEffects;
use crate::types::METERS_PER_KM;

/// At or below this yield no tsunami is evaluated (Mt).
pub const TSUNAMI_MIN_MEGATONS: f64 = 1.0;
/// Wave height at 1 Mt (m).
pub const TSUNAMI_HEIGHT_COEFF_M: f64 = 10.0;
pub const TSUNAMI_HEIGHT_EXPONENT: f64 = 0.5;
/// Propagation radius at 1 Mt (m).
pub const TSUNAMI_RADIUS_COEFF_M: f64 = 50_000.0;
pub const TSUNAMI_RADIUS_EXPONENT: f64 = 1.0 / 3.0;
/// Share of the propagation circle that meets a coastline.
pub const COASTLINE_FRACTION: f64 = 0.25;
/// Inland reach per meter of wave height (km/m).
pub const INUNDATION_KM_PER_WAVE_METER: f64 = 0.05;
/// Population density assumed along affected coasts (people/km²).
pub const COASTAL_POPULATION_DENSITY: f64 = 150.0;
pub const TSUNAMI_FATALITY_RATE: f64 = 0.1;

/// Tsunami estimate, or `None` when the impact does not qualify.
pub fn tsunami_effects(megatons: f64, is_ocean_impact: bool) -> Option<TsunamiEffects> {
    if !is_ocean_impact || megatons <= TSUNAMI_MIN_MEGATONS {
        return None;
    }

    let height_m = TSUNAMI_HEIGHT_COEFF_M * megatons.powf(TSUNAMI_HEIGHT_EXPONENT);
    let radius_m = TSUNAMI_RADIUS_COEFF_M * megatons.powf(TSUNAMI_RADIUS_EXPONENT);
    let affected_coastline_km = TAU * (radius_m / METERS_PER_KM) * COASTLINE_FRACTION;
    let inundated_km2 = affected_coastline_km * height_m * INUNDATION_KM_PER_WAVE_METER;
    let deaths = (inundated_km2 * COASTAL_POPULATION_DENSITY * TSUNAMI_FATALITY_RATE).floor() as u64;

    Some(TsunamiEffects {
        height_m,
        radius_m,
        deaths,
        affected_coastline_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_land_impact_has_no_tsunami() {
        assert!(tsunami_effects(5_000.0, false).is_none());
    }

    #[test]
    fn test_yield_threshold_is_exclusive() {
        assert!(tsunami_effects(0.5, true).is_none());
        assert!(tsunami_effects(TSUNAMI_MIN_MEGATONS, true).is_none());
        assert!(tsunami_effects(1.0001, true).is_some());
    }

    #[test]
    fn test_five_megaton_ocean_impact() {
        let wave = tsunami_effects(5.0, true).expect("qualifying ocean impact");
        assert_relative_eq!(wave.height_m, 22.36, epsilon = 0.01);
        assert_relative_eq!(wave.radius_m, 85_499.0, max_relative = 1e-3);
        assert_relative_eq!(wave.affected_coastline_km, 134.3, max_relative = 1e-3);
        assert!(wave.deaths > 0);

        let inundated = wave.affected_coastline_km * wave.height_m * INUNDATION_KM_PER_WAVE_METER;
        assert!(wave.deaths as f64 <= inundated * COASTAL_POPULATION_DENSITY);
    }
}
