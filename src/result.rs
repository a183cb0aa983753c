//! Output bundle of an impact computation.
//!
//! An [`ImpactResult`] is produced once per computation and never mutated.
//! Every group is always present: branches that did not run (tsunami over
//! land, for instance) are zero-filled rather than omitted, so consumers
//! can rely on a stable shape.

use serde::Serialize;

use crate::params::ImpactLocation;
use crate::types::PopulationDensity;

/// Mass, speed and energy of the impactor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KineticEffects {
    /// Mass (kg).
    pub mass_kg: f64,
    /// Impact velocity (m/s).
    pub velocity_m_s: f64,
    /// Impact velocity (mph).
    pub velocity_mph: f64,
    /// Kinetic energy (J).
    pub energy_j: f64,
    /// TNT equivalent (megatons).
    pub megatons: f64,
    /// TNT equivalent (gigatons).
    pub gigatons: f64,
}

/// Planform of the crater as seen from above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CraterShape {
    Circular,
    Elliptical,
    HighlyElongated,
}

impl CraterShape {
    pub fn label(self) -> &'static str {
        match self {
            CraterShape::Circular => "Circular",
            CraterShape::Elliptical => "Elliptical",
            CraterShape::HighlyElongated => "Highly Elongated",
        }
    }
}

impl std::fmt::Display for CraterShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CraterEffects {
    /// Diameter a vertical impact of the same energy would leave (m).
    pub base_diameter_m: f64,
    /// Angle-corrected diameter (m). Never exceeds `base_diameter_m`.
    pub diameter_m: f64,
    pub depth_m: f64,
    /// Energy coupling factor for the impact angle (%).
    pub angle_scaling_percent: f64,
    pub shape: CraterShape,
    pub blast_radius_m: f64,
    /// People inside the crater footprint.
    pub vaporized: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FireballEffects {
    pub radius_m: f64,
    pub deaths: u64,
    pub third_degree_burn_radius_m: f64,
    pub third_degree_burns: u64,
    pub second_degree_burn_radius_m: f64,
    pub second_degree_burns: u64,
    pub tree_ignition_radius_m: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShockwaveEffects {
    pub peak_decibels: f64,
    pub deaths: u64,
    pub lung_damage_radius_m: f64,
    pub eardrum_rupture_radius_m: f64,
    pub building_collapse_radius_m: f64,
    pub home_collapse_radius_m: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindEffects {
    pub peak_speed_mph: f64,
    pub deaths: u64,
    /// Winds stronger than an EF5 tornado.
    pub ef5_radius_m: f64,
    /// Most homes flattened.
    pub leveling_radius_m: f64,
    pub tree_knockdown_radius_m: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EarthquakeEffects {
    /// Richter-equivalent magnitude. Small impactors give negative values.
    pub magnitude: f64,
    pub felt_radius_m: f64,
    pub deaths: u64,
}

/// Tsunami estimate. All zero unless the impact is an ocean impact above
/// the minimum yield.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TsunamiEffects {
    pub height_m: f64,
    pub radius_m: f64,
    pub deaths: u64,
    pub affected_coastline_km: f64,
}

impl TsunamiEffects {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// What it would take to push the impactor clear of the Earth.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeflectionRequirement {
    pub delta_v_m_s: f64,
    pub energy_j: f64,
    pub energy_megatons: f64,
    /// Human-readable yield comparison, e.g. "≈ 12.0 × Tsar Bomba".
    pub nuclear_comparison: String,
    /// Coupling efficiency for the impact angle (%), in [10, 100].
    pub angle_efficiency_percent: f64,
}

/// Classification flags and context numbers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactMeta {
    pub will_airburst: bool,
    /// Derived from `population_density == 0`, so uninhabited land counts
    /// as ocean too.
    pub is_ocean_impact: bool,
    /// Typical interval between impacts of this yield (years).
    pub frequency_years: f64,
    /// Energy relative to one day of a mature hurricane.
    pub hurricane_ratio: f64,
    pub impact_angle_deg: f64,
    pub population_density: PopulationDensity,
    pub location: ImpactLocation,
}

/// Full set of derived effects for one impact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactResult {
    pub kinetic: KineticEffects,
    pub crater: CraterEffects,
    pub fireball: FireballEffects,
    pub shockwave: ShockwaveEffects,
    pub wind: WindEffects,
    pub earthquake: EarthquakeEffects,
    pub tsunami: TsunamiEffects,
    pub deflection: DeflectionRequirement,
    pub meta: ImpactMeta,
}

impl ImpactResult {
    /// Package stage outputs. A tsunami stage that did not run is passed as
    /// `None` and stored zero-filled.
    pub fn assemble(
        kinetic: KineticEffects,
        crater: CraterEffects,
        fireball: FireballEffects,
        shockwave: ShockwaveEffects,
        wind: WindEffects,
        earthquake: EarthquakeEffects,
        tsunami: Option<TsunamiEffects>,
        deflection: DeflectionRequirement,
        meta: ImpactMeta,
    ) -> Self {
        Self {
            kinetic,
            crater,
            fireball,
            shockwave,
            wind,
            earthquake,
            tsunami: tsunami.unwrap_or_default(),
            deflection,
            meta,
        }
    }

    /// Sum of every fatality estimate. Zones overlap, so this is an upper
    /// bound rather than a head count.
    pub fn total_deaths(&self) -> u64 {
        [
            self.crater.vaporized,
            self.fireball.deaths,
            self.shockwave.deaths,
            self.wind.deaths,
            self.earthquake.deaths,
            self.tsunami.deaths,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }

    pub fn is_tsunami_evaluated(&self) -> bool {
        !self.tsunami.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crater_shape_labels() {
        assert_eq!(CraterShape::Circular.to_string(), "Circular");
        assert_eq!(CraterShape::HighlyElongated.to_string(), "Highly Elongated");
    }

    #[test]
    fn test_default_tsunami_is_zero() {
        assert!(TsunamiEffects::default().is_zero());
        let wave = TsunamiEffects {
            height_m: 3.0,
            ..Default::default()
        };
        assert!(!wave.is_zero());
    }
}
