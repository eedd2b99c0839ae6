//! Solve command implementation for the geotour CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use geotour_core::{Solution, Solver};
use geotour_solver_local::{LocalSearchConfig, LocalSearchSolver};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::directions::write_table;
use crate::points::load_points;
use crate::{
    ARG_SOLVE_FORMAT, ARG_SOLVE_MIN_IMPROVEMENT, ARG_SOLVE_POINTS, CliError, ENV_SOLVE_POINTS,
};

/// How the solved tour is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Aligned directions table.
    #[default]
    Table,
    /// Full-precision solution as pretty-printed JSON.
    Json,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a closed tour through the points listed in a JSON \
                 file. Each entry carries `lat`, `lon` and an optional \
                 `name`; unnamed entries are numbered as map-selected \
                 points. The tour starts at the first point.",
    about = "Solve a tour through a set of points"
)]
#[ortho_config(prefix = "GEOTOUR")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file listing the points to visit.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) points: Option<Utf8PathBuf>,
    /// Output format for the solved tour.
    #[arg(long = ARG_SOLVE_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Smallest saving, in miles, that 2-opt accepts as an improvement.
    #[arg(long = ARG_SOLVE_MIN_IMPROVEMENT, value_name = "miles")]
    #[serde(default)]
    pub(crate) min_improvement_miles: Option<f64>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON points file.
    pub(crate) points: Utf8PathBuf,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Tuning for the local-search solver.
    pub(crate) solver: LocalSearchConfig,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.points, ARG_SOLVE_POINTS)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match crate::fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let points = args.points.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_POINTS,
            env: ENV_SOLVE_POINTS,
        })?;

        let mut solver = LocalSearchConfig::default();
        if let Some(value) = args.min_improvement_miles {
            if !value.is_finite() || value < 0.0 {
                return Err(CliError::InvalidThreshold {
                    field: ARG_SOLVE_MIN_IMPROVEMENT,
                    value,
                });
            }
            solver.min_improvement_miles = value;
        }

        Ok(Self {
            points,
            format: args.format.unwrap_or_default(),
            solver,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(crate) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        Ok(Box::new(LocalSearchSolver::with_config(config.solver)))
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let point_set = load_points(&config.points)?;
    let solver = builder.build(&config)?;
    let solution = solver
        .solve(point_set.points())
        .map_err(|source| CliError::Solve { source })?;
    write_solution(writer, &solution, config.format)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn write_solution(
    writer: &mut dyn Write,
    solution: &Solution<'_>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(writer, solution).map_err(CliError::WriteSolveOutput),
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(solution).map_err(CliError::SerialiseSolution)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteSolveOutput)?;
            writer
                .write_all(b"\n")
                .map_err(CliError::WriteSolveOutput)
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
