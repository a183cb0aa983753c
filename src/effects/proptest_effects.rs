//! Property-based tests for the impact engine using proptest.
//!
//! These tests verify engine invariants across the whole slider domain and
//! beyond it.

use proptest::prelude::*;

use crate::params::{ImpactLocation, ImpactParameters};
use crate::test_utils::{assertions, fixtures};
use crate::types::{PopulationDensity, circle_area_km2};

use super::{CRATER_ANGLE_FLOOR, MIN_ANGLE_EFFICIENCY, TSUNAMI_MIN_MEGATONS, compute_impact};

fn impactor() -> impl Strategy<Value = ImpactParameters> {
    (1.0f64..2000.0, 1.0f64..72.0, 0.5f64..=90.0, 1000.0f64..8000.0).prop_map(
        |(diameter_m, speed_km_s, angle_deg, density_kg_m3)| ImpactParameters {
            diameter_m,
            speed_km_s,
            angle_deg,
            density_kg_m3,
        },
    )
}

fn density() -> impl Strategy<Value = PopulationDensity> {
    prop_oneof![
        Just(PopulationDensity::OCEAN),
        Just(PopulationDensity::GLOBAL_AVERAGE),
        (1u32..50_000).prop_map(PopulationDensity),
    ]
}

fn site() -> ImpactLocation {
    fixtures::new_york()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Identical inputs give bit-identical results.
    #[test]
    fn prop_deterministic(params in impactor(), population in density()) {
        let first = compute_impact(&params, &site(), population);
        let second = compute_impact(&params, &site(), population);
        prop_assert_eq!(first, second);
    }

    /// Larger or faster bodies release more energy and dig bigger craters.
    #[test]
    fn prop_monotonic_in_diameter_and_speed(
        params in impactor(),
        growth in 1.01f64..3.0,
        population in density(),
    ) {
        let base = compute_impact(&params, &site(), population);

        for grown in [
            ImpactParameters { diameter_m: params.diameter_m * growth, ..params },
            ImpactParameters { speed_km_s: params.speed_km_s * growth, ..params },
        ] {
            let bigger = compute_impact(&grown, &site(), population);
            prop_assert!(bigger.kinetic.energy_j > base.kinetic.energy_j);
            prop_assert!(bigger.kinetic.megatons > base.kinetic.megatons);
            prop_assert!(bigger.crater.diameter_m > base.crater.diameter_m);
            prop_assert!(bigger.crater.blast_radius_m > base.crater.blast_radius_m);
        }
    }

    /// The angle-corrected crater stays between the floor and the vertical baseline.
    #[test]
    fn prop_crater_between_floor_and_baseline(params in impactor()) {
        let result = compute_impact(&params, &site(), PopulationDensity::GLOBAL_AVERAGE);
        let crater = &result.crater;
        prop_assert!(crater.diameter_m <= crater.base_diameter_m);
        prop_assert!(crater.diameter_m >= CRATER_ANGLE_FLOOR * crater.base_diameter_m);
    }

    /// Tsunami fields are zero unless the site is ocean and the yield clears 1 Mt.
    #[test]
    fn prop_tsunami_gating(params in impactor(), population in density()) {
        let result = compute_impact(&params, &site(), population);
        let qualifies = population.is_ocean() && result.kinetic.megatons > TSUNAMI_MIN_MEGATONS;
        prop_assert_eq!(result.is_tsunami_evaluated(), qualifies);
        if !qualifies {
            prop_assert_eq!(result.tsunami.height_m, 0.0);
            prop_assert_eq!(result.tsunami.radius_m, 0.0);
            prop_assert_eq!(result.tsunami.deaths, 0);
        }
    }

    /// Deflection angle efficiency stays in [0.1, 1.0].
    #[test]
    fn prop_deflection_efficiency_bounded(params in impactor()) {
        let result = compute_impact(&params, &site(), PopulationDensity::GLOBAL_AVERAGE);
        let efficiency = result.deflection.angle_efficiency_percent / 100.0;
        prop_assert!(efficiency >= MIN_ANGLE_EFFICIENCY - 1e-12);
        prop_assert!(efficiency <= 1.0 + 1e-12);
    }

    /// No negative masses, energies or radii.
    #[test]
    fn prop_non_negative(params in impactor(), population in density()) {
        let result = compute_impact(&params, &site(), population);
        assertions::assert_non_negative(&result);
    }

    /// Deaths never exceed the population living in the zone.
    #[test]
    fn prop_deaths_bounded_by_zone_population(params in impactor(), population in density()) {
        let result = compute_impact(&params, &site(), population);
        let people = |radius_m: f64| circle_area_km2(radius_m) * population.per_km2();

        prop_assert!(result.crater.vaporized as f64 <= people(result.crater.diameter_m / 2.0));
        prop_assert!(result.fireball.deaths as f64 <= people(result.fireball.radius_m));
        prop_assert!(result.shockwave.deaths as f64 <= people(result.shockwave.home_collapse_radius_m));
        prop_assert!(result.wind.deaths as f64 <= people(result.wind.ef5_radius_m));
        prop_assert!(result.earthquake.deaths as f64 <= people(result.earthquake.felt_radius_m));
    }

    /// Ocean classification follows zero density exactly.
    #[test]
    fn prop_ocean_iff_zero_density(params in impactor(), population in density()) {
        let result = compute_impact(&params, &site(), population);
        prop_assert_eq!(result.meta.is_ocean_impact, population.0 == 0);
    }
}
