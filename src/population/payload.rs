//! Population service payload parsing.
//!
//! The service answers `{"density": <people per km²>}` for populated cells
//! and `{"density": null}` where it has no data (open ocean). Extra fields
//! are ignored.

use serde_json::Value;

use super::{DensityReading, PopulationError};

impl DensityReading {
    /// Parse a raw response body.
    pub fn from_json(body: &str) -> Result<Self, PopulationError> {
        let value: Value = serde_json::from_str(body)?;
        let Value::Object(fields) = value else {
            return Err(PopulationError::Malformed("expected a JSON object".into()));
        };

        match fields.get("density") {
            None => Err(PopulationError::Malformed("missing `density` field".into())),
            Some(Value::Null) => Ok(DensityReading::NoData),
            Some(Value::Number(number)) => {
                let density = number
                    .as_f64()
                    .ok_or_else(|| PopulationError::Malformed(format!("unrepresentable density {number}")))?;
                if density < 0.0 {
                    return Err(PopulationError::Malformed(format!("negative density {density}")));
                }
                Ok(DensityReading::Density(density))
            }
            Some(other) => Err(PopulationError::Malformed(format!(
                "`density` must be a number or null, got {other}"
            ))),
        }
    }
}
