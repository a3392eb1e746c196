//! Plan command implementation for the planner CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::{Coord, LineString};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use portal_planner_core::tables::{PORTAL_RANGE_M, XM_VALUES};
use portal_planner_core::{ObjectiveKind, PlayStyle, TravelMode, Waypoint, WaypointCatalogue};
use portal_planner_optimizer::RouteSession;
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::report::PlanReport;
use crate::{
    ARG_BUDGET, ARG_OBJECTIVE, ARG_PLAN_REQUEST, ARG_PLAY_STYLE, ARG_RADIUS, ARG_TRAVEL_MODE,
    CliError, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a route through the portals near a travel corridor. \
                 The request file holds the corridor as a list of {x, y} \
                 coordinates, an optional radius_m, and the candidate \
                 waypoints. The report is printed to stdout as JSON.",
    about = "Plan a portal route from a JSON request"
)]
#[ortho_config(prefix = "PORTAL_PLANNER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// What the agent does at each portal: quick, full or fields.
    #[arg(long = ARG_PLAY_STYLE, value_name = "style")]
    #[serde(default)]
    pub(crate) play_style: Option<PlayStyle>,
    /// How to order the route: distance, action-points or energy.
    #[arg(long = ARG_OBJECTIVE, value_name = "objective")]
    #[serde(default)]
    pub(crate) objective: Option<ObjectiveKind>,
    /// XM available at the start of the route.
    #[arg(long = ARG_BUDGET, value_name = "xm")]
    #[serde(default)]
    pub(crate) budget: Option<u64>,
    /// How the agent travels: walking, biking or driving.
    #[arg(long = ARG_TRAVEL_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) travel_mode: Option<TravelMode>,
    /// Corridor half-width in metres; overrides the request's `radius_m`.
    #[arg(long = ARG_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Actions assumed at each portal.
    pub(crate) play_style: PlayStyle,
    /// Ordering objective.
    pub(crate) objective: ObjectiveKind,
    /// Starting XM.
    pub(crate) budget: u64,
    /// Travel mode for time estimates.
    pub(crate) travel_mode: TravelMode,
    /// Corridor radius override.
    pub(crate) radius: Option<f64>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_PLAN_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_PLAN_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_PLAN_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self {
            request_path,
            play_style: args.play_style.unwrap_or_default(),
            objective: args.objective.unwrap_or_default(),
            budget: args.budget.unwrap_or(XM_VALUES.max_xm.l8),
            travel_mode: args.travel_mode.unwrap_or_default(),
            radius: args.radius,
        })
    }
}

/// JSON request accepted by `plan`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PlanRequest {
    /// Travel path, longitude/latitude pairs.
    pub(crate) corridor: Vec<Coord<f64>>,
    /// Corridor half-width in metres.
    #[serde(default)]
    pub(crate) radius_m: Option<f64>,
    /// Candidate portals.
    pub(crate) waypoints: Vec<Waypoint>,
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    plan_from_config(&config, writer)
}

pub(crate) fn plan_from_config(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.validate_sources()?;
    let request = load_plan_request(&config.request_path)?;
    let report = execute_plan(config, request)?;
    write_plan_report(writer, &report)
}

pub(crate) fn execute_plan(config: &PlanConfig, request: PlanRequest) -> Result<PlanReport, CliError> {
    let radius = config
        .radius
        .or(request.radius_m)
        .unwrap_or(PORTAL_RANGE_M);
    let corridor: LineString<f64> = request.corridor.into();
    log::info!(
        "planning {} candidate(s) within {radius} m of a {}-vertex corridor",
        request.waypoints.len(),
        corridor.0.len()
    );

    let mut session = RouteSession::new(WaypointCatalogue::new(request.waypoints));
    session.configure(config.play_style, config.objective, config.budget);
    session.set_travel_mode(config.travel_mode);
    session
        .plan_corridor(&corridor, radius)
        .map_err(|source| CliError::Plan { source })?;
    Ok(PlanReport::from_session(&session))
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(crate) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_report(writer: &mut dyn Write, report: &PlanReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialisePlanReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}
