//! Population density lookup for impact sites.
//!
//! The density service is an external collaborator reached through
//! [`PopulationSource`]. [`PopulationResolver`] wraps a source with a
//! timeout and fallback policy so that lookups never fail:
//!
//! - A concrete reading is rounded to whole people per km².
//! - "No data" (open ocean, uninhabited) resolves to zero.
//! - Transport errors, malformed payloads and timeouts resolve to the
//!   global average and are logged.

mod payload;
pub mod sequencer;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use bevy::log::{debug, warn};
use bevy::platform::time::Instant;
use bevy::tasks::{IoTaskPool, Task, TaskPool, block_on, futures_lite::future};
use crossbeam_channel::RecvTimeoutError;

pub use sequencer::{LookupSequencer, RequestToken};

use crate::params::ImpactLocation;
use crate::types::PopulationDensity;

/// Default wait for the density service.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Reasons a lookup did not produce a usable reading.
#[derive(thiserror::Error, Debug)]
pub enum PopulationError {
    #[error("population service unavailable: {0}")]
    Transport(String),

    #[error("malformed population payload: {0}")]
    Malformed(String),

    #[error("population payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("population lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("population lookup stopped without answering")]
    WorkerLost,
}

/// What the density service reported for a coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DensityReading {
    /// People per km², as reported.
    Density(f64),
    /// No data for this cell, read as ocean.
    NoData,
}

/// A population density service. Implementations may block.
pub trait PopulationSource: Send + Sync + 'static {
    fn lookup(&self, location: ImpactLocation) -> Result<DensityReading, PopulationError>;
}

impl<F> PopulationSource for F
where
    F: Fn(ImpactLocation) -> Result<DensityReading, PopulationError> + Send + Sync + 'static,
{
    fn lookup(&self, location: ImpactLocation) -> Result<DensityReading, PopulationError> {
        self(location)
    }
}

/// Source that answers the same reading everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedDensity(pub DensityReading);

impl FixedDensity {
    pub fn measured(people_per_km2: f64) -> Self {
        Self(DensityReading::Density(people_per_km2))
    }

    pub fn ocean() -> Self {
        Self(DensityReading::NoData)
    }
}

impl PopulationSource for FixedDensity {
    fn lookup(&self, _location: ImpactLocation) -> Result<DensityReading, PopulationError> {
        Ok(self.0)
    }
}

/// Source for hosts without a density service. Every lookup fails, so the
/// resolver always falls back to the global average.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl PopulationSource for Unavailable {
    fn lookup(&self, _location: ImpactLocation) -> Result<DensityReading, PopulationError> {
        Err(PopulationError::Transport("no population service configured".into()))
    }
}

/// How a resolved density was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DensitySource {
    Measured,
    NoData,
    Fallback,
}

/// Density handed to the engine, with provenance for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedDensity {
    pub density: PopulationDensity,
    pub source: DensitySource,
}

/// A lookup in flight on the IO task pool.
///
/// Dropping it cancels the lookup if the source has not started yet.
pub struct DensityLookup {
    location: ImpactLocation,
    deadline: Instant,
    task: Task<Result<DensityReading, PopulationError>>,
}

impl DensityLookup {
    pub fn location(&self) -> ImpactLocation {
        self.location
    }
}

/// Lookup policy around a [`PopulationSource`].
#[derive(Clone)]
pub struct PopulationResolver {
    source: Arc<dyn PopulationSource>,
    timeout: Duration,
    fallback: PopulationDensity,
}

impl PopulationResolver {
    pub fn new(source: Arc<dyn PopulationSource>) -> Self {
        Self {
            source,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
            fallback: PopulationDensity::GLOBAL_AVERAGE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fallback(mut self, fallback: PopulationDensity) -> Self {
        self.fallback = fallback;
        self
    }

    /// Start a lookup on the IO task pool without waiting for it.
    pub fn spawn(&self, location: ImpactLocation) -> DensityLookup {
        let source = Arc::clone(&self.source);
        let task = IoTaskPool::get_or_init(TaskPool::new)
            .spawn(async move { guarded_lookup(source.as_ref(), location) });

        DensityLookup {
            location,
            deadline: Instant::now() + self.timeout,
            task,
        }
    }

    /// Check on a spawned lookup without blocking.
    ///
    /// Returns `None` while the source is still working and the deadline
    /// has not passed. Past the deadline the fallback is returned even if
    /// the source never answers.
    pub fn poll(&self, lookup: &mut DensityLookup) -> Option<ResolvedDensity> {
        let answer = match block_on(future::poll_once(&mut lookup.task)) {
            Some(answer) => answer,
            None if Instant::now() >= lookup.deadline => Err(PopulationError::Timeout(self.timeout)),
            None => return None,
        };
        Some(self.settle(lookup.location, answer))
    }

    /// Resolve the density at `location`, blocking the caller for at most
    /// the timeout. Never fails.
    ///
    /// A source still running at the deadline is left to finish on the
    /// pool; its late answer is discarded.
    pub fn resolve(&self, location: ImpactLocation) -> ResolvedDensity {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let source = Arc::clone(&self.source);

        IoTaskPool::get_or_init(TaskPool::new)
            .spawn(async move {
                // Receiver may be gone after a timeout
                let _ = tx.send(guarded_lookup(source.as_ref(), location));
            })
            .detach();

        let answer = match rx.recv_timeout(self.timeout) {
            Ok(answer) => answer,
            Err(RecvTimeoutError::Timeout) => Err(PopulationError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(PopulationError::WorkerLost),
        };
        self.settle(location, answer)
    }

    fn settle(
        &self,
        location: ImpactLocation,
        answer: Result<DensityReading, PopulationError>,
    ) -> ResolvedDensity {
        match answer {
            Ok(reading) => self.interpret(location, reading),
            Err(err) => {
                warn!("Population lookup at {location} failed ({err}), using {}", self.fallback);
                self.fallback()
            }
        }
    }

    fn interpret(&self, location: ImpactLocation, reading: DensityReading) -> ResolvedDensity {
        match reading {
            DensityReading::NoData => {
                debug!("No population data at {location}, treating as ocean");
                ResolvedDensity {
                    density: PopulationDensity::OCEAN,
                    source: DensitySource::NoData,
                }
            }
            DensityReading::Density(value) => match PopulationDensity::from_measurement(value) {
                Some(density) => ResolvedDensity {
                    density,
                    source: DensitySource::Measured,
                },
                None => {
                    warn!("Population service returned invalid density {value} at {location}, using {}", self.fallback);
                    self.fallback()
                }
            },
        }
    }

    fn fallback(&self) -> ResolvedDensity {
        ResolvedDensity {
            density: self.fallback,
            source: DensitySource::Fallback,
        }
    }
}

/// Run the source, turning a panic into [`PopulationError::WorkerLost`].
fn guarded_lookup(
    source: &dyn PopulationSource,
    location: ImpactLocation,
) -> Result<DensityReading, PopulationError> {
    catch_unwind(AssertUnwindSafe(|| source.lookup(location)))
        .unwrap_or_else(|_| Err(PopulationError::WorkerLost))
}

/// Resolve the density at `location` with the default fallback.
pub fn resolve_population_density(
    source: Arc<dyn PopulationSource>,
    location: ImpactLocation,
    timeout: Duration,
) -> ResolvedDensity {
    PopulationResolver::new(source)
        .with_timeout(timeout)
        .resolve(location)
}

impl std::fmt::Debug for PopulationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopulationResolver")
            .field("timeout", &self.timeout)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}
