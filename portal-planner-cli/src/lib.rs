//! Command-line interface for the portal route planner.
//!
//! `portal-planner plan <request.json>` reads a corridor and a candidate
//! portal list, plans a route with the configured play style and objective,
//! and prints a JSON report. Options layer from flags, `PORTAL_PLANNER_*`
//! environment variables and configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

mod error;
mod fs;
mod plan;
mod report;

pub use error::CliError;

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAY_STYLE: &str = "play-style";
pub(crate) const ARG_OBJECTIVE: &str = "objective";
pub(crate) const ARG_BUDGET: &str = "budget";
pub(crate) const ARG_TRAVEL_MODE: &str = "travel-mode";
pub(crate) const ARG_RADIUS: &str = "radius";
pub(crate) const ENV_PLAN_REQUEST: &str = "PORTAL_PLANNER_CMDS_PLAN_REQUEST_PATH";

/// Run the planner CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the request file or
/// planning fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

/// Route log output to stderr so stdout stays clean JSON.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    // A logger may already be installed when embedded; keep that one.
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        log::debug!("logger already initialised");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "portal-planner",
    about = "Plan portal routes along a travel corridor",
    version
)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a route from a JSON request file.
    Plan(plan::PlanArgs),
}

#[cfg(test)]
mod tests;
