//! Velocity change needed to make the impactor miss.
//!
//! The body is assumed detected at a reference distance and must be
//! nudged sideways by the potentially-hazardous-asteroid threshold before
//! it arrives. The lateral push needed grows as the impact angle gets
//! shallower, down to a floor efficiency.

use crate::result::{DeflectionRequirement, KineticEffects};
use crate::types::{AU_TO_METERS, MEGATON_TO_JOULES};

/// Required miss distance (AU).
pub const PHA_THRESHOLD_AU: f64 = 0.05;
/// Detection happens at least this many threshold distances out.
pub const DETECTION_THRESHOLD_MULTIPLE: f64 = 20.0;
/// Detection happens at least this far out (AU).
pub const MIN_DETECTION_DISTANCE_AU: f64 = 1.0;
/// Grazing impacts never drop coupling efficiency below this.
pub const MIN_ANGLE_EFFICIENCY: f64 = 0.1;

/// A well-known explosive yield to compare deflection energy against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceYield {
    pub name: &'static str,
    pub megatons: f64,
}

/// Reference yields in ascending order.
pub static REFERENCE_YIELDS: &[ReferenceYield] = &[
    ReferenceYield {
        name: "Hiroshima bomb",
        megatons: 0.015,
    },
    ReferenceYield {
        name: "modern warhead",
        megatons: 0.3,
    },
    ReferenceYield {
        name: "Tsar Bomba",
        megatons: 50.0,
    },
];

/// Distance at which the impactor is assumed to be detected (m).
pub fn detection_distance_m() -> f64 {
    MIN_DETECTION_DISTANCE_AU.max(DETECTION_THRESHOLD_MULTIPLE * PHA_THRESHOLD_AU) * AU_TO_METERS
}

/// sin(angle) floored at [`MIN_ANGLE_EFFICIENCY`], in [0.1, 1].
pub fn angle_efficiency(angle_rad: f64) -> f64 {
    angle_rad.sin().clamp(MIN_ANGLE_EFFICIENCY, 1.0)
}

/// Describe `megatons` relative to the largest reference yield it exceeds.
pub fn nuclear_comparison(megatons: f64) -> String {
    match REFERENCE_YIELDS
        .iter()
        .rev()
        .find(|reference| megatons > reference.megatons)
    {
        Some(reference) => format!("≈ {:.1} × {}", megatons / reference.megatons, reference.name),
        None => format!("< 1 × {}", REFERENCE_YIELDS[0].name),
    }
}

pub fn deflection_requirement(kinetic: &KineticEffects, angle_rad: f64) -> DeflectionRequirement {
    let time_to_impact_s = detection_distance_m() / kinetic.velocity_m_s;
    let efficiency = angle_efficiency(angle_rad);
    let delta_v_m_s = PHA_THRESHOLD_AU * AU_TO_METERS / time_to_impact_s / efficiency;

    let energy_j = 0.5 * kinetic.mass_kg * delta_v_m_s * delta_v_m_s;
    let energy_megatons = energy_j / MEGATON_TO_JOULES;

    DeflectionRequirement {
        delta_v_m_s,
        energy_j,
        energy_megatons,
        nuclear_comparison: nuclear_comparison(energy_megatons),
        angle_efficiency_percent: efficiency * 100.0,
    }
}
