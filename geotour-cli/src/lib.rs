//! Command-line interface for solving geographic tours.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod directions;
mod error;
mod fs;
mod logging;
mod points;
mod solve;

pub use error::CliError;
pub use logging::init_logging;

use solve::{SolveArgs, run_solve};

pub(crate) const ARG_SOLVE_POINTS: &str = "points";
pub(crate) const ARG_SOLVE_FORMAT: &str = "format";
pub(crate) const ARG_SOLVE_MIN_IMPROVEMENT: &str = "min-improvement-miles";
pub(crate) const ENV_SOLVE_POINTS: &str = "GEOTOUR_CMDS_SOLVE_POINTS";

/// Run the geotour CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "geotour",
    about = "Plan a short closed tour through geographic points",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Solve a tour through the points in a JSON file and print directions.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
