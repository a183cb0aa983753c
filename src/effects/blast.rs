//! Fireball, shockwave and wind zones.
//!
//! Radii follow nuclear-test style yield scaling `r = k · Mt^p`. Thermal
//! radii grow slightly faster than the fireball, overpressure and wind
//! radii follow cube-root scaling.

use crate::result::{FireballEffects, ShockwaveEffects, WindEffects};
use crate::types::PopulationDensity;

use super::{ring_casualties, zone_casualties};

// Fireball

/// Fireball radius at 1 Mt (m).
pub const FIREBALL_RADIUS_COEFF_M: f64 = 1_000.0;
pub const FIREBALL_YIELD_EXPONENT: f64 = 0.4;
pub const FIREBALL_FATALITY_RATE: f64 = 0.9;

/// Yield exponent shared by every thermal radius.
pub const THERMAL_YIELD_EXPONENT: f64 = 0.41;
/// Third-degree burn radius at 1 Mt (m).
pub const THIRD_DEGREE_BURN_COEFF_M: f64 = 8_000.0;
/// Second-degree burn radius at 1 Mt (m).
pub const SECOND_DEGREE_BURN_COEFF_M: f64 = 11_000.0;
/// Clothing and tree ignition radius at 1 Mt (m).
pub const TREE_IGNITION_COEFF_M: f64 = 9_500.0;
pub const THIRD_DEGREE_BURN_RATE: f64 = 0.3;
pub const SECOND_DEGREE_BURN_RATE: f64 = 0.15;

// Shockwave

pub const OVERPRESSURE_YIELD_EXPONENT: f64 = 1.0 / 3.0;
/// Lung damage radius at 1 Mt (m).
pub const LUNG_DAMAGE_COEFF_M: f64 = 1_000.0;
/// Multi-story building collapse radius at 1 Mt (m).
pub const BUILDING_COLLAPSE_COEFF_M: f64 = 1_600.0;
/// Wood-frame home collapse radius at 1 Mt (m).
pub const HOME_COLLAPSE_COEFF_M: f64 = 4_500.0;
/// Eardrum rupture radius at 1 Mt (m).
pub const EARDRUM_RUPTURE_COEFF_M: f64 = 6_000.0;
/// Applied inside the home-collapse radius.
pub const SHOCKWAVE_FATALITY_RATE: f64 = 0.3;
/// Peak sound level at 1 Mt (dB).
pub const PEAK_DECIBELS_AT_ONE_MEGATON: f64 = 150.0;
/// Added decibels per tenfold increase in yield.
pub const DECIBELS_PER_YIELD_DECADE: f64 = 10.0;

// Wind

/// Peak wind speed at 1 Mt (mph).
pub const PEAK_WIND_COEFF_MPH: f64 = 1_500.0;
pub const PEAK_WIND_YIELD_EXPONENT: f64 = 0.18;
/// Winds above EF5 tornado strength, radius at 1 Mt (m).
pub const EF5_WIND_COEFF_M: f64 = 2_800.0;
/// Homes leveled, radius at 1 Mt (m).
pub const LEVELING_WIND_COEFF_M: f64 = 3_500.0;
/// Trees knocked down, radius at 1 Mt (m).
pub const TREE_KNOCKDOWN_COEFF_M: f64 = 7_000.0;
/// Applied inside the EF5 radius.
pub const WIND_FATALITY_RATE: f64 = 0.25;

fn yield_radius(coefficient_m: f64, megatons: f64, exponent: f64) -> f64 {
    coefficient_m * megatons.max(0.0).powf(exponent)
}

pub fn fireball_effects(megatons: f64, population: PopulationDensity) -> FireballEffects {
    let radius_m = yield_radius(FIREBALL_RADIUS_COEFF_M, megatons, FIREBALL_YIELD_EXPONENT);
    let third_degree_burn_radius_m =
        yield_radius(THIRD_DEGREE_BURN_COEFF_M, megatons, THERMAL_YIELD_EXPONENT);
    let second_degree_burn_radius_m =
        yield_radius(SECOND_DEGREE_BURN_COEFF_M, megatons, THERMAL_YIELD_EXPONENT);

    FireballEffects {
        radius_m,
        deaths: zone_casualties(radius_m, population, FIREBALL_FATALITY_RATE),
        third_degree_burn_radius_m,
        third_degree_burns: ring_casualties(
            radius_m,
            third_degree_burn_radius_m,
            population,
            THIRD_DEGREE_BURN_RATE,
        ),
        second_degree_burn_radius_m,
        second_degree_burns: ring_casualties(
            third_degree_burn_radius_m,
            second_degree_burn_radius_m,
            population,
            SECOND_DEGREE_BURN_RATE,
        ),
        tree_ignition_radius_m: yield_radius(TREE_IGNITION_COEFF_M, megatons, THERMAL_YIELD_EXPONENT),
    }
}

/// Peak sound level near the blast, floored at 0 dB.
pub fn peak_decibels(megatons: f64) -> f64 {
    if megatons <= 0.0 {
        return 0.0;
    }
    (PEAK_DECIBELS_AT_ONE_MEGATON + DECIBELS_PER_YIELD_DECADE * megatons.log10()).max(0.0)
}

pub fn shockwave_effects(megatons: f64, population: PopulationDensity) -> ShockwaveEffects {
    let home_collapse_radius_m =
        yield_radius(HOME_COLLAPSE_COEFF_M, megatons, OVERPRESSURE_YIELD_EXPONENT);

    ShockwaveEffects {
        peak_decibels: peak_decibels(megatons),
        deaths: zone_casualties(home_collapse_radius_m, population, SHOCKWAVE_FATALITY_RATE),
        lung_damage_radius_m: yield_radius(LUNG_DAMAGE_COEFF_M, megatons, OVERPRESSURE_YIELD_EXPONENT),
        eardrum_rupture_radius_m: yield_radius(
            EARDRUM_RUPTURE_COEFF_M,
            megatons,
            OVERPRESSURE_YIELD_EXPONENT,
        ),
        building_collapse_radius_m: yield_radius(
            BUILDING_COLLAPSE_COEFF_M,
            megatons,
            OVERPRESSURE_YIELD_EXPONENT,
        ),
        home_collapse_radius_m,
    }
}

pub fn wind_effects(megatons: f64, population: PopulationDensity) -> WindEffects {
    let ef5_radius_m = yield_radius(EF5_WIND_COEFF_M, megatons, OVERPRESSURE_YIELD_EXPONENT);

    WindEffects {
        peak_speed_mph: yield_radius(PEAK_WIND_COEFF_MPH, megatons, PEAK_WIND_YIELD_EXPONENT),
        deaths: zone_casualties(ef5_radius_m, population, WIND_FATALITY_RATE),
        ef5_radius_m,
        leveling_radius_m: yield_radius(LEVELING_WIND_COEFF_M, megatons, OVERPRESSURE_YIELD_EXPONENT),
        tree_knockdown_radius_m: yield_radius(
            TREE_KNOCKDOWN_COEFF_M,
            megatons,
            OVERPRESSURE_YIELD_EXPONENT,
        ),
    }
}
