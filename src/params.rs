//! Impactor parameters and target location, with input validation.
//!
//! Values usually arrive from UI controls as text. [`RawImpactInput`]
//! coerces them to numbers and [`ImpactParameters::new`] rejects anything
//! outside the physical domain. The engine assumes validated input.

use serde::{Deserialize, Serialize};

/// Rejection raised for an out-of-domain physical parameter.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidParameterError {
    #[error("{field} must be a number, got {raw:?}")]
    NotANumber { field: &'static str, raw: String },

    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("impact angle must be in (0, 90] degrees, got {0}")]
    AngleOutOfRange(f64),

    #[error("latitude must be in [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be in [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),
}

/// Physical description of the incoming body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Diameter (meters).
    pub diameter_m: f64,
    /// Speed at atmospheric entry (km/s).
    pub speed_km_s: f64,
    /// Impact angle from the horizontal (degrees, 90 = vertical).
    pub angle_deg: f64,
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        // Half-kilometer stony body, typical near-Earth encounter speed
        Self {
            diameter_m: 500.0,
            speed_km_s: 17.0,
            angle_deg: 45.0,
            density_kg_m3: 3500.0,
        }
    }
}

impl ImpactParameters {
    /// Build validated parameters.
    pub fn new(
        diameter_m: f64,
        speed_km_s: f64,
        angle_deg: f64,
        density_kg_m3: f64,
    ) -> Result<Self, InvalidParameterError> {
        let params = Self {
            diameter_m,
            speed_km_s,
            angle_deg,
            density_kg_m3,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every field against the physical domain.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        require_positive("diameter", self.diameter_m)?;
        require_positive("speed", self.speed_km_s)?;
        require_positive("density", self.density_kg_m3)?;
        // NaN fails both comparisons
        if !(self.angle_deg > 0.0 && self.angle_deg <= 90.0) {
            return Err(InvalidParameterError::AngleOutOfRange(self.angle_deg));
        }
        Ok(())
    }

    /// Clamp each field into the given slider ranges.
    ///
    /// Never panics, even for inverted bounds.
    pub fn clamped_to(&self, ranges: &ParameterRanges) -> Self {
        Self {
            diameter_m: ranges.diameter_m.clamp(self.diameter_m),
            speed_km_s: ranges.speed_km_s.clamp(self.speed_km_s),
            angle_deg: ranges.angle_deg.clamp(self.angle_deg),
            density_kg_m3: ranges.density_kg_m3.clamp(self.density_kg_m3),
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), InvalidParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidParameterError::NonPositive { field, value })
    }
}

/// Parameter values exactly as typed into UI controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawImpactInput {
    pub diameter: String,
    pub speed: String,
    pub angle: String,
    pub density: String,
}

impl RawImpactInput {
    /// Parse and validate into [`ImpactParameters`].
    pub fn normalize(&self) -> Result<ImpactParameters, InvalidParameterError> {
        ImpactParameters::new(
            parse_field("diameter", &self.diameter)?,
            parse_field("speed", &self.speed)?,
            parse_field("angle", &self.angle)?,
            parse_field("density", &self.density)?,
        )
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, InvalidParameterError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InvalidParameterError::NotANumber {
            field,
            raw: raw.to_string(),
        })
}

/// Point on the Earth's surface targeted by the impactor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactLocation {
    /// Latitude (degrees, north positive).
    pub latitude: f64,
    /// Longitude (degrees, east positive).
    pub longitude: f64,
}

impl ImpactLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidParameterError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidParameterError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidParameterError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for ImpactLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}°, {:.4}°)", self.latitude, self.longitude)
    }
}

/// Inclusive bounds for one slider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the bounds. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    /// Bounds are usable if both ends are finite, positive and ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }
}

/// Advisory ranges offered by the parameter sliders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterRanges {
    pub diameter_m: Bounds,
    pub speed_km_s: Bounds,
    pub angle_deg: Bounds,
    pub density_kg_m3: Bounds,
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            diameter_m: Bounds::new(1.0, 2000.0),
            speed_km_s: Bounds::new(1.0, 72.0),
            angle_deg: Bounds::new(1.0, 90.0),
            density_kg_m3: Bounds::new(1000.0, 8000.0),
        }
    }
}

impl ParameterRanges {
    /// Name of the first slider with unusable bounds, if any.
    pub fn first_invalid(&self) -> Option<&'static str> {
        [
            ("diameter_m", self.diameter_m),
            ("speed_km_s", self.speed_km_s),
            ("angle_deg", self.angle_deg),
            ("density_kg_m3", self.density_kg_m3),
        ]
        .into_iter()
        .find(|(_, bounds)| !bounds.is_valid())
        .map(|(name, _)| name)
        .or_else(|| (self.angle_deg.max > 90.0).then_some("angle_deg"))
    }
}
