//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::thread;
use std::time::Duration;

use bevy::prelude::*;
use impactor::params::{ImpactLocation, ImpactParameters};

/// Build validated parameters, panicking on invalid input.
pub fn params(diameter_m: f64, speed_km_s: f64, angle_deg: f64, density_kg_m3: f64) -> ImpactParameters {
    ImpactParameters::new(diameter_m, speed_km_s, angle_deg, density_kg_m3)
        .expect("test parameters should be valid")
}

pub fn location(latitude: f64, longitude: f64) -> ImpactLocation {
    ImpactLocation::new(latitude, longitude).expect("test location should be valid")
}

/// Run `app.update()` until `done` holds or `max_frames` pass.
///
/// Sleeps briefly between frames so IO-pool tasks get to run.
pub fn update_until(app: &mut App, max_frames: usize, done: impl Fn(&World) -> bool) -> bool {
    for _ in 0..max_frames {
        app.update();
        if done(app.world()) {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}
