//! Mass, velocity and kinetic energy of a spherical impactor.

use std::f64::consts::PI;

use crate::params::ImpactParameters;
use crate::result::KineticEffects;
use crate::types::{KM_S_TO_M_S, MEGATON_TO_JOULES, MEGATONS_PER_GIGATON, MPS_TO_MPH};

/// Compute kinetic quantities for a uniform sphere.
///
/// V = 4/3·π·(d/2)³, m = ρ·V, E = ½·m·v²
pub fn kinetic_effects(params: &ImpactParameters) -> KineticEffects {
    let radius = params.diameter_m / 2.0;
    let volume = 4.0 / 3.0 * PI * radius.powi(3);
    let mass_kg = params.density_kg_m3 * volume;

    let velocity_m_s = params.speed_km_s * KM_S_TO_M_S;
    let energy_j = 0.5 * mass_kg * velocity_m_s * velocity_m_s;
    let megatons = energy_j / MEGATON_TO_JOULES;

    KineticEffects {
        mass_kg,
        velocity_m_s,
        velocity_mph: velocity_m_s * MPS_TO_MPH,
        energy_j,
        megatons,
        gigatons: megatons / MEGATONS_PER_GIGATON,
    }
}
