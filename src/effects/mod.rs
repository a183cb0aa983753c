//! Impact physics engine.
//!
//! A fixed pipeline of closed-form empirical formulas turns impactor
//! parameters and a local population density into an [`ImpactResult`].
//! Each stage depends only on the inputs and earlier stages:
//!
//! 1. Kinetic quantities (mass, velocity, energy, TNT equivalent)
//! 2. Angle coupling factor
//! 3. Crater geometry
//! 4. Airburst classification
//! 5. Casualty zones (fireball, shockwave, wind, earthquake)
//! 6. Tsunami (ocean impacts above 1 Mt only)
//! 7. Deflection requirement
//! 8. Frequency and energy comparisons
//!
//! The engine is pure: no I/O, no shared state. Inputs are expected to have
//! passed [`ImpactParameters::validate`]; for those it never fails.

mod blast;
mod crater;
mod deflection;
mod frequency;
mod kinetic;
mod seismic;
mod tsunami;

#[cfg(test)]
mod proptest_effects;

pub use blast::{fireball_effects, peak_decibels, shockwave_effects, wind_effects};
pub use crater::{
    CRATER_ANGLE_FLOOR, angle_scaling, base_crater_diameter, crater_effects, crater_shape,
    will_airburst,
};
pub use deflection::{
    MIN_ANGLE_EFFICIENCY, PHA_THRESHOLD_AU, REFERENCE_YIELDS, ReferenceYield, angle_efficiency,
    deflection_requirement, nuclear_comparison,
};
pub use frequency::{HURRICANE_DAILY_ENERGY_J, hurricane_ratio, impact_frequency_years};
pub use kinetic::kinetic_effects;
pub use seismic::{earthquake_effects, seismic_magnitude};
pub use tsunami::{COASTAL_POPULATION_DENSITY, TSUNAMI_MIN_MEGATONS, tsunami_effects};

use crate::params::{ImpactLocation, ImpactParameters};
use crate::result::{ImpactMeta, ImpactResult};
use crate::types::{DEG_TO_RAD, PopulationDensity, circle_area_km2};

/// Compute every effect of one impact.
///
/// Deterministic: identical inputs give bit-identical results.
pub fn compute_impact(
    params: &ImpactParameters,
    location: &ImpactLocation,
    population: PopulationDensity,
) -> ImpactResult {
    let kinetic = kinetic_effects(params);

    let angle_rad = params.angle_deg * DEG_TO_RAD;
    let coupling = angle_scaling(angle_rad);

    let crater = crater_effects(kinetic.energy_j, params.angle_deg, coupling, population);

    let fireball = fireball_effects(kinetic.megatons, population);
    let shockwave = shockwave_effects(kinetic.megatons, population);
    let wind = wind_effects(kinetic.megatons, population);
    let earthquake = earthquake_effects(kinetic.energy_j, population);

    // Zero density stands in for "ocean"; uninhabited land reads the same
    let is_ocean_impact = population.is_ocean();
    let tsunami = tsunami_effects(kinetic.megatons, is_ocean_impact);

    let deflection = deflection_requirement(&kinetic, angle_rad);

    let meta = ImpactMeta {
        will_airburst: will_airburst(params),
        is_ocean_impact,
        frequency_years: impact_frequency_years(kinetic.megatons),
        hurricane_ratio: hurricane_ratio(kinetic.energy_j),
        impact_angle_deg: params.angle_deg,
        population_density: population,
        location: *location,
    };

    ImpactResult::assemble(
        kinetic, crater, fireball, shockwave, wind, earthquake, tsunami, deflection, meta,
    )
}

/// Casualties inside a disc of `radius_m`.
pub(crate) fn zone_casualties(radius_m: f64, population: PopulationDensity, rate: f64) -> u64 {
    ring_casualties(0.0, radius_m, population, rate)
}

/// Casualties in the annulus between `inner_m` and `outer_m`.
///
/// Rounded down, so the count never exceeds area × density × rate.
pub(crate) fn ring_casualties(
    inner_m: f64,
    outer_m: f64,
    population: PopulationDensity,
    rate: f64,
) -> u64 {
    let area_km2 = (circle_area_km2(outer_m) - circle_area_km2(inner_m)).max(0.0);
    // `as` saturates on overflow
    (area_km2 * population.per_km2() * rate).floor() as u64
}
