//! Impactor - headless impact report
//!
//! Runs one impact through the session and prints the result as JSON,
//! together with where the population density came from.
//!
//! Usage: `impactor [preset] [latitude longitude] [density]`
//!
//! Without a density the lookup has no service to ask and falls back to
//! the global average.

use std::sync::Arc;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use serde::Serialize;

use impactor::params::ImpactLocation;
use impactor::population::{
    FixedDensity, PopulationSource, RequestToken, ResolvedDensity, Unavailable,
};
use impactor::result::ImpactResult;
use impactor::scenarios::{IMPACTOR_PRESETS, ImpactorPreset, find_preset};
use impactor::session::{
    ImpactComputed, ImpactPlugin, ImpactSession, SelectTarget, UpdateParameters,
};

/// Where to aim when neither the preset nor the arguments name a site.
const DEFAULT_SITE: ImpactLocation = ImpactLocation {
    latitude: 40.7128,
    longitude: -74.0060,
};

#[derive(Resource, Clone, Copy)]
struct Request {
    preset: &'static ImpactorPreset,
    location: ImpactLocation,
}

/// Printed output.
#[derive(Serialize)]
struct Report<'a> {
    preset: &'static str,
    lookup: RequestToken,
    population: Option<ResolvedDensity>,
    result: &'a ImpactResult,
}

fn main() -> AppExit {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let preset = match args.first() {
        Some(id) => match find_preset(id) {
            Some(preset) => preset,
            None => {
                let known: Vec<&str> = IMPACTOR_PRESETS.iter().map(|p| p.id).collect();
                eprintln!("Unknown preset '{id}'. Known presets: {}", known.join(", "));
                return AppExit::error();
            }
        },
        None => &IMPACTOR_PRESETS[0],
    };

    let location = match parse_location(&args) {
        Ok(location) => location.or(preset.site).unwrap_or(DEFAULT_SITE),
        Err(message) => {
            eprintln!("{message}");
            return AppExit::error();
        }
    };

    let source: Arc<dyn PopulationSource> = match args.get(3).map(|raw| raw.parse::<f64>()) {
        Some(Ok(density)) => Arc::new(FixedDensity::measured(density)),
        Some(Err(err)) => {
            eprintln!("Invalid density: {err}");
            return AppExit::error();
        }
        None => Arc::new(Unavailable),
    };

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0 / 60.0))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(ImpactPlugin::new(source))
        .insert_resource(Request { preset, location })
        .add_systems(Startup, submit_request)
        .add_systems(Update, report_and_exit)
        .run()
}

fn parse_location(args: &[String]) -> Result<Option<ImpactLocation>, String> {
    let (Some(lat), Some(lng)) = (args.get(1), args.get(2)) else {
        return Ok(None);
    };
    let latitude = lat.parse::<f64>().map_err(|err| format!("Invalid latitude: {err}"))?;
    let longitude = lng.parse::<f64>().map_err(|err| format!("Invalid longitude: {err}"))?;
    ImpactLocation::new(latitude, longitude)
        .map(Some)
        .map_err(|err| err.to_string())
}

fn submit_request(
    request: Res<Request>,
    mut params: MessageWriter<UpdateParameters>,
    mut targets: MessageWriter<SelectTarget>,
) {
    info!("Simulating {} at {}", request.preset.name, request.location);
    params.write(UpdateParameters {
        params: request.preset.params,
    });
    targets.write(SelectTarget {
        location: request.location,
    });
}

fn report_and_exit(
    request: Res<Request>,
    session: Res<ImpactSession>,
    mut computed: MessageReader<ImpactComputed>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(event) = computed.read().last() else {
        return;
    };
    let report = Report {
        preset: request.preset.id,
        lookup: event.token,
        population: session.density(),
        result: &event.result,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            exit.write(AppExit::Success);
        }
        Err(err) => {
            error!("Cannot serialize impact result: {err}");
            exit.write(AppExit::error());
        }
    }
}
