//! Preset impactor definitions.

use crate::params::{ImpactLocation, ImpactParameters};

use super::ImpactorPreset;

/// All available presets. The first one is the default.
pub static IMPACTOR_PRESETS: &[ImpactorPreset] = &[
    SAMPLE_STONY,
    CHELYABINSK,
    TUNGUSKA,
    BARRINGER,
    APOPHIS,
    CHICXULUB,
];

/// Default: half-kilometer stony body at a typical encounter speed.
pub static SAMPLE_STONY: ImpactorPreset = ImpactorPreset {
    id: "sample_stony",
    name: "Sample Stony Asteroid",
    description: "500 m rocky body at 17 km/s. Regional devastation.",
    params: ImpactParameters {
        diameter_m: 500.0,
        speed_km_s: 17.0,
        angle_deg: 45.0,
        density_kg_m3: 3500.0,
    },
    site: None,
};

/// Chelyabinsk, Russia, 15 February 2013.
pub static CHELYABINSK: ImpactorPreset = ImpactorPreset {
    id: "chelyabinsk",
    name: "Chelyabinsk",
    description: "~19 m shallow-entry airburst that blew out windows across a city.",
    params: ImpactParameters {
        diameter_m: 19.0,
        speed_km_s: 19.0,
        angle_deg: 18.0,
        density_kg_m3: 3300.0,
    },
    site: Some(ImpactLocation {
        latitude: 54.8,
        longitude: 61.1,
    }),
};

/// Tunguska, Siberia, 30 June 1908.
pub static TUNGUSKA: ImpactorPreset = ImpactorPreset {
    id: "tunguska",
    name: "Tunguska",
    description: "~60 m body that flattened 2,000 km² of forest without a crater.",
    params: ImpactParameters {
        diameter_m: 60.0,
        speed_km_s: 15.0,
        angle_deg: 35.0,
        density_kg_m3: 2000.0,
    },
    site: Some(ImpactLocation {
        latitude: 60.886,
        longitude: 101.894,
    }),
};

/// Meteor Crater, Arizona, ~50,000 years ago.
pub static BARRINGER: ImpactorPreset = ImpactorPreset {
    id: "barringer",
    name: "Barringer Crater",
    description: "~50 m iron impactor that dug the 1.2 km Meteor Crater.",
    params: ImpactParameters {
        diameter_m: 50.0,
        speed_km_s: 12.8,
        angle_deg: 80.0,
        density_kg_m3: 7800.0,
    },
    site: Some(ImpactLocation {
        latitude: 35.027,
        longitude: -111.022,
    }),
};

/// Apophis-sized body, for the 2029 close approach.
pub static APOPHIS: ImpactorPreset = ImpactorPreset {
    id: "apophis",
    name: "Apophis",
    description: "370 m near-Earth asteroid. Will miss in 2029; this is the what-if.",
    params: ImpactParameters {
        diameter_m: 370.0,
        speed_km_s: 12.6,
        angle_deg: 45.0,
        density_kg_m3: 3200.0,
    },
    site: None,
};

/// Chicxulub, Yucatán, 66 million years ago.
pub static CHICXULUB: ImpactorPreset = ImpactorPreset {
    id: "chicxulub",
    name: "Chicxulub",
    description: "~10 km body that ended the age of dinosaurs.",
    params: ImpactParameters {
        diameter_m: 10_000.0,
        speed_km_s: 20.0,
        angle_deg: 60.0,
        density_kg_m3: 2600.0,
    },
    site: Some(ImpactLocation {
        latitude: 21.4,
        longitude: -89.5,
    }),
};
