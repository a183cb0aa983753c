//! Test utilities for impact effect tests.
//!
//! Provides fixtures for common impactors and target sites, and assertions
//! for result-wide invariants.

use crate::params::{ImpactLocation, ImpactParameters};

/// Fixtures for creating test impactors and sites.
pub mod fixtures {
    use super::*;

    /// 500 m stony body at 17 km/s, 45°. About 7.9 Gt.
    pub fn half_km_stony() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 500.0,
            speed_km_s: 17.0,
            angle_deg: 45.0,
            density_kg_m3: 3500.0,
        }
    }

    /// Small, fast, steep body that explodes in the atmosphere.
    pub fn small_fast_airburst() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 50.0,
            speed_km_s: 20.0,
            angle_deg: 30.0,
            density_kg_m3: 3000.0,
        }
    }

    /// About 4.8 Mt, enough to raise a tsunami over water.
    pub fn ocean_five_megaton() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 40.0,
            speed_km_s: 20.0,
            angle_deg: 45.0,
            density_kg_m3: 3000.0,
        }
    }

    /// About 0.6 Mt, below the tsunami threshold.
    pub fn ocean_half_megaton() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 20.0,
            speed_km_s: 20.0,
            angle_deg: 45.0,
            density_kg_m3: 3000.0,
        }
    }

    pub fn new_york() -> ImpactLocation {
        ImpactLocation {
            latitude: 40.7128,
            longitude: -74.0060,
        }
    }

    pub fn mid_pacific() -> ImpactLocation {
        ImpactLocation {
            latitude: 0.0,
            longitude: -160.0,
        }
    }
}

/// Assertions for verifying result-wide invariants.
pub mod assertions {
    use crate::result::ImpactResult;

    /// Every mass, energy, radius and count must be non-negative.
    ///
    /// # Panics
    /// Panics naming the first offending field.
    pub fn assert_non_negative(result: &ImpactResult) {
        let fields = [
            ("mass_kg", result.kinetic.mass_kg),
            ("energy_j", result.kinetic.energy_j),
            ("megatons", result.kinetic.megatons),
            ("crater.base_diameter_m", result.crater.base_diameter_m),
            ("crater.diameter_m", result.crater.diameter_m),
            ("crater.depth_m", result.crater.depth_m),
            ("crater.blast_radius_m", result.crater.blast_radius_m),
            ("fireball.radius_m", result.fireball.radius_m),
            ("fireball.third_degree_burn_radius_m", result.fireball.third_degree_burn_radius_m),
            ("fireball.second_degree_burn_radius_m", result.fireball.second_degree_burn_radius_m),
            ("fireball.tree_ignition_radius_m", result.fireball.tree_ignition_radius_m),
            ("shockwave.peak_decibels", result.shockwave.peak_decibels),
            ("shockwave.lung_damage_radius_m", result.shockwave.lung_damage_radius_m),
            ("shockwave.eardrum_rupture_radius_m", result.shockwave.eardrum_rupture_radius_m),
            ("shockwave.building_collapse_radius_m", result.shockwave.building_collapse_radius_m),
            ("shockwave.home_collapse_radius_m", result.shockwave.home_collapse_radius_m),
            ("wind.peak_speed_mph", result.wind.peak_speed_mph),
            ("wind.ef5_radius_m", result.wind.ef5_radius_m),
            ("wind.leveling_radius_m", result.wind.leveling_radius_m),
            ("wind.tree_knockdown_radius_m", result.wind.tree_knockdown_radius_m),
            ("earthquake.felt_radius_m", result.earthquake.felt_radius_m),
            ("tsunami.height_m", result.tsunami.height_m),
            ("tsunami.radius_m", result.tsunami.radius_m),
            ("tsunami.affected_coastline_km", result.tsunami.affected_coastline_km),
            ("deflection.delta_v_m_s", result.deflection.delta_v_m_s),
            ("deflection.energy_j", result.deflection.energy_j),
            ("deflection.energy_megatons", result.deflection.energy_megatons),
        ];
        for (name, value) in fields {
            assert!(value >= 0.0, "{name} is negative: {value:e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid_parameters() {
        for params in [
            fixtures::half_km_stony(),
            fixtures::small_fast_airburst(),
            fixtures::ocean_five_megaton(),
            fixtures::ocean_half_megaton(),
        ] {
            assert!(params.validate().is_ok(), "{params:?}");
        }
    }

    #[test]
    fn test_fixture_locations_are_valid() {
        for location in [fixtures::new_york(), fixtures::mid_pacific()] {
            assert!(ImpactLocation::new(location.latitude, location.longitude).is_ok());
        }
    }
}
