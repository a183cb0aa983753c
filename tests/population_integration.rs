//! Integration tests for population density resolution.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use impactor::params::ImpactLocation;
use impactor::population::{
    DensityReading, DensitySource, PopulationError, PopulationResolver, Unavailable,
};
use impactor::types::PopulationDensity;

use common::location;

/// Service answering with a canned JSON body, as a web API would.
fn json_service(body: &'static str) -> PopulationResolver {
    let source = move |_: ImpactLocation| -> Result<DensityReading, PopulationError> {
        DensityReading::from_json(body)
    };
    PopulationResolver::new(Arc::new(source))
}

#[test]
fn test_json_density_is_rounded() {
    let resolved = json_service(r#"{"density": 1234.6}"#).resolve(location(48.85, 2.35));
    assert_eq!(resolved.density, PopulationDensity(1_235));
    assert_eq!(resolved.source, DensitySource::Measured);
}

#[test]
fn test_json_null_density_reads_as_ocean() {
    let resolved = json_service(r#"{"density": null}"#).resolve(location(0.0, -160.0));
    assert_eq!(resolved.density, PopulationDensity::OCEAN);
    assert_eq!(resolved.source, DensitySource::NoData);
}

#[test]
fn test_garbage_body_falls_back() {
    let resolved = json_service("<html>502 Bad Gateway</html>").resolve(location(0.0, 0.0));
    assert_eq!(resolved.density, PopulationDensity::GLOBAL_AVERAGE);
    assert_eq!(resolved.source, DensitySource::Fallback);
}

#[test]
fn test_unavailable_service_falls_back() {
    let resolved = PopulationResolver::new(Arc::new(Unavailable)).resolve(location(0.0, 0.0));
    assert_eq!(resolved.density, PopulationDensity::GLOBAL_AVERAGE);
    assert_eq!(resolved.source, DensitySource::Fallback);
}

#[test]
fn test_source_is_asked_once_per_resolve() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let source = move |_: ImpactLocation| -> Result<DensityReading, PopulationError> {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(DensityReading::Density(10.0))
    };
    let resolver = PopulationResolver::new(Arc::new(source)).with_timeout(Duration::from_secs(1));

    resolver.resolve(location(1.0, 1.0));
    resolver.resolve(location(2.0, 2.0));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
