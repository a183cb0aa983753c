//! Preset impactors for quick selection.
//!
//! Historical events and reference bodies, sized so the engine reproduces
//! roughly the right scale of effects:
//! - Chelyabinsk and Tunguska airbursts
//! - Barringer (Meteor Crater) iron impactor
//! - Apophis-sized body
//! - Chicxulub-scale extinction event

pub mod presets;

use crate::params::{ImpactLocation, ImpactParameters};

pub use presets::IMPACTOR_PRESETS;

/// A named impactor, optionally tied to its historical site.
#[derive(Clone, Copy, Debug)]
pub struct ImpactorPreset {
    /// Unique identifier for the preset.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description.
    pub description: &'static str,
    pub params: ImpactParameters,
    /// Historical impact site, if any.
    pub site: Option<ImpactLocation>,
}

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static ImpactorPreset> {
    IMPACTOR_PRESETS.iter().find(|preset| preset.id == id)
}
