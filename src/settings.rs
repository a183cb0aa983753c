//! Runtime configuration for impact sessions.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::params::ParameterRanges;
use crate::types::PopulationDensity;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("population lookup timeout must be positive")]
    ZeroTimeout,

    #[error("invalid slider range for {0}")]
    InvalidRange(&'static str),
}

/// Configuration for population lookups and parameter sliders.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactSettings {
    /// How long to wait for the population service (milliseconds).
    pub population_timeout_ms: u64,
    /// Density used when the service fails or times out.
    pub fallback_density: PopulationDensity,
    /// Slider ranges offered to the user.
    pub ranges: ParameterRanges,
}

impl Default for ImpactSettings {
    fn default() -> Self {
        Self {
            population_timeout_ms: 5_000,
            fallback_density: PopulationDensity::GLOBAL_AVERAGE,
            ranges: ParameterRanges::default(),
        }
    }
}

impl ImpactSettings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.population_timeout_ms == 0 {
            return Err(SettingsError::ZeroTimeout);
        }
        if let Some(field) = self.ranges.first_invalid() {
            return Err(SettingsError::InvalidRange(field));
        }
        Ok(())
    }

    pub fn population_timeout(&self) -> Duration {
        Duration::from_millis(self.population_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Bounds;

    #[test]
    fn test_defaults_match_service_contract() {
        let settings = ImpactSettings::default();
        assert_eq!(settings.population_timeout(), Duration::from_secs(5));
        assert_eq!(settings.fallback_density, PopulationDensity(57));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = ImpactSettings::from_json(r#"{"population_timeout_ms": 1500}"#).expect("valid settings");
        assert_eq!(settings.population_timeout(), Duration::from_millis(1500));
        assert_eq!(settings.fallback_density, PopulationDensity::GLOBAL_AVERAGE);
        assert_eq!(settings.ranges, ParameterRanges::default());
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut settings = ImpactSettings::default();
        settings.ranges.diameter_m = Bounds::new(10.0, 500.0);
        let text = serde_json::to_string(&settings).expect("serializable");
        assert_eq!(ImpactSettings::from_json(&text).expect("valid settings"), settings);
    }

    #[test]
    fn test_rejects_bad_settings() {
        assert!(matches!(
            ImpactSettings::from_json(r#"{"population_timeout_ms": 0}"#),
            Err(SettingsError::ZeroTimeout)
        ));
        assert!(matches!(
            ImpactSettings::from_json(r#"{"ranges": {"diameter_m": {"min": 5, "max": 1},
                "speed_km_s": {"min": 1, "max": 72}, "angle_deg": {"min": 1, "max": 90},
                "density_kg_m3": {"min": 1000, "max": 8000}}}"#),
            Err(SettingsError::InvalidRange("diameter_m"))
        ));
        assert!(matches!(
            ImpactSettings::from_json("timeout=5"),
            Err(SettingsError::Json(_))
        ));
    }
}
