//! Impact session: the resolve → compute loop behind the UI.
//!
//! The host sends messages when the user picks a target, moves a slider or
//! clears the map. Target selection starts an asynchronous population
//! lookup on the IO task pool; when it completes, the engine runs and the
//! fresh [`ImpactResult`] is stored and announced with [`ImpactComputed`].
//!
//! Each lookup carries a [`RequestToken`]. Selecting a new target cancels
//! every older lookup, and answers for anything but the latest token are
//! dropped, so a slow lookup for an old target never overwrites the result
//! for a newer one or delays it past the lookup timeout.

use std::sync::Arc;

use bevy::prelude::*;

use crate::effects::compute_impact;
use crate::params::{ImpactLocation, ImpactParameters};
use crate::population::{
    DensityLookup, LookupSequencer, PopulationResolver, PopulationSource, RequestToken,
    ResolvedDensity,
};
use crate::result::ImpactResult;
use crate::settings::ImpactSettings;

/// Plugin wiring the impact session into an app.
pub struct ImpactPlugin {
    source: Arc<dyn PopulationSource>,
}

impl ImpactPlugin {
    pub fn new(source: Arc<dyn PopulationSource>) -> Self {
        Self { source }
    }
}

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImpactSettings>()
            .init_resource::<ImpactSession>()
            .init_resource::<PendingLookups>()
            .insert_resource(PopulationService(Arc::clone(&self.source)))
            .add_message::<SelectTarget>()
            .add_message::<UpdateParameters>()
            .add_message::<ClearTarget>()
            .add_message::<ImpactComputed>()
            .add_systems(
                Update,
                (
                    handle_clear_target,
                    handle_parameter_updates,
                    handle_target_selection,
                    poll_population_lookups,
                )
                    .chain(),
            );
    }
}

/// The population service the session resolves against.
#[derive(Resource, Clone)]
pub struct PopulationService(pub Arc<dyn PopulationSource>);

/// User picked a point on the map.
#[derive(Message, Clone, Debug)]
pub struct SelectTarget {
    pub location: ImpactLocation,
}

/// User changed the impactor parameters.
#[derive(Message, Clone, Debug)]
pub struct UpdateParameters {
    pub params: ImpactParameters,
}

/// User cleared the target and its results.
#[derive(Message, Clone, Debug, Default)]
pub struct ClearTarget;

/// A new result replaced the previous one.
#[derive(Message, Clone, Debug)]
pub struct ImpactComputed {
    /// Lookup the density came from.
    pub token: RequestToken,
    pub result: ImpactResult,
}

/// Current inputs and the latest result.
///
/// Results are never edited in place: every change of inputs produces a
/// new [`ImpactResult`] that replaces the old one.
#[derive(Resource, Debug, Default)]
pub struct ImpactSession {
    params: ImpactParameters,
    location: Option<ImpactLocation>,
    density: Option<ResolvedDensity>,
    result: Option<ImpactResult>,
    sequencer: LookupSequencer,
}

impl ImpactSession {
    pub fn params(&self) -> &ImpactParameters {
        &self.params
    }

    pub fn location(&self) -> Option<ImpactLocation> {
        self.location
    }

    /// Density of the current target, once resolved.
    pub fn density(&self) -> Option<ResolvedDensity> {
        self.density
    }

    pub fn result(&self) -> Option<&ImpactResult> {
        self.result.as_ref()
    }

    /// Token of the most recent lookup.
    pub fn latest_token(&self) -> RequestToken {
        self.sequencer.latest()
    }

    /// Whether a lookup for the current target is still outstanding.
    pub fn is_resolving(&self) -> bool {
        self.location.is_some() && self.density.is_none()
    }

    /// Recompute from the current inputs, if a density is known.
    fn recompute(&mut self) -> Option<&ImpactResult> {
        let location = self.location?;
        let density = self.density?;
        self.result = Some(compute_impact(&self.params, &location, density.density));
        self.result.as_ref()
    }

    fn clear(&mut self) {
        self.location = None;
        self.density = None;
        self.result = None;
        self.sequencer.invalidate();
    }
}

/// Population lookups in flight.
#[derive(Resource, Default)]
pub struct PendingLookups {
    lookups: Vec<PendingLookup>,
}

struct PendingLookup {
    token: RequestToken,
    resolver: PopulationResolver,
    lookup: DensityLookup,
}

impl PendingLookups {
    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }
}

fn handle_clear_target(
    mut events: MessageReader<ClearTarget>,
    mut session: ResMut<ImpactSession>,
    mut pending: ResMut<PendingLookups>,
) {
    if events.read().count() == 0 {
        return;
    }
    // Dropping a task cancels it
    pending.lookups.clear();
    session.clear();
    info!("Impact target cleared");
}

fn handle_parameter_updates(
    mut events: MessageReader<UpdateParameters>,
    mut session: ResMut<ImpactSession>,
    mut computed: MessageWriter<ImpactComputed>,
) {
    // Only the last slider position matters
    let Some(update) = events.read().last() else {
        return;
    };
    if let Err(err) = update.params.validate() {
        warn!("Ignoring impact parameters: {err}");
        return;
    }
    session.params = update.params;

    let token = session.sequencer.latest();
    if let Some(result) = session.recompute() {
        computed.write(ImpactComputed {
            token,
            result: result.clone(),
        });
    }
}

fn handle_target_selection(
    mut events: MessageReader<SelectTarget>,
    mut session: ResMut<ImpactSession>,
    mut pending: ResMut<PendingLookups>,
    service: Res<PopulationService>,
    settings: Res<ImpactSettings>,
) {
    for event in events.read() {
        let token = session.sequencer.issue();
        session.location = Some(event.location);
        session.density = None;
        session.result = None;

        // Dropping a task cancels it if it has not started
        let superseded = pending.lookups.len();
        pending
            .lookups
            .retain(|entry| session.sequencer.is_current(entry.token));
        if superseded > 0 {
            debug!("Cancelled {superseded} superseded population lookup(s)");
        }

        let resolver = PopulationResolver::new(Arc::clone(&service.0))
            .with_timeout(settings.population_timeout())
            .with_fallback(settings.fallback_density);
        let lookup = resolver.spawn(event.location);

        debug!("Population lookup #{} started for {}", token.value(), event.location);
        pending.lookups.push(PendingLookup {
            token,
            resolver,
            lookup,
        });
    }
}

fn poll_population_lookups(
    mut pending: ResMut<PendingLookups>,
    mut session: ResMut<ImpactSession>,
    mut computed: MessageWriter<ImpactComputed>,
) {
    let mut finished = Vec::new();
    pending.lookups.retain_mut(|entry| {
        match entry.resolver.poll(&mut entry.lookup) {
            Some(resolved) => {
                finished.push((entry.token, entry.lookup.location(), resolved));
                false
            }
            None => true,
        }
    });

    for (token, location, resolved) in finished {
        if !session.sequencer.is_current(token) {
            debug!("Dropping stale population lookup #{} for {}", token.value(), location);
            continue;
        }

        session.density = Some(resolved);
        if let Some(result) = session.recompute() {
            info!(
                "Impact at {}: {:.2} Mt, crater {:.0} m, {:?} density {}",
                location,
                result.kinetic.megatons,
                result.crater.diameter_m,
                resolved.source,
                resolved.density
            );
            computed.write(ImpactComputed {
                token,
                result: result.clone(),
            });
        }
    }
}
