//! Core unit conversions, physical constants and shared value types.

use serde::{Deserialize, Serialize};

// Physical constants (SI units)

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Joules per megaton of TNT
pub const MEGATON_TO_JOULES: f64 = 4.184e15;

/// Megatons per gigaton
pub const MEGATONS_PER_GIGATON: f64 = 1000.0;

/// Meters per second to miles per hour
pub const MPS_TO_MPH: f64 = 2.236_936_292_054_402;

/// Kilometers per second to meters per second
pub const KM_S_TO_M_S: f64 = 1000.0;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Circular area in square kilometers for a radius given in meters.
pub fn circle_area_km2(radius_m: f64) -> f64 {
    let r_km = radius_m / METERS_PER_KM;
    std::f64::consts::PI * r_km * r_km
}

/// Resident population density in people per square kilometer.
///
/// Zero doubles as the "open ocean" marker: the population service reports
/// no data over water, and uninhabited land reads the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopulationDensity(pub u32);

impl PopulationDensity {
    /// Ocean or uninhabited land.
    pub const OCEAN: Self = Self(0);

    /// Global average used whenever the real density is unknown.
    pub const GLOBAL_AVERAGE: Self = Self(57);

    /// Round a measured density to whole people per km².
    ///
    /// Returns `None` for negative or non-finite input.
    pub fn from_measurement(people_per_km2: f64) -> Option<Self> {
        if !people_per_km2.is_finite() || people_per_km2 < 0.0 {
            return None;
        }
        // `as` saturates at u32::MAX
        Some(Self(people_per_km2.round() as u32))
    }

    /// People per km² as a float for area arithmetic.
    pub fn per_km2(self) -> f64 {
        f64::from(self.0)
    }

    /// Whether this density classifies the site as open ocean.
    pub fn is_ocean(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for PopulationDensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} people/km²", self.0)
    }
}
