//! Error types emitted by the geotour CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use geotour_core::{PointSetError, SolveError};
use thiserror::Error;

/// Errors emitted by the geotour CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The 2-opt threshold is negative or not a number.
    #[error("--{field} must be a finite number of miles no smaller than zero, got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the points file failed.
    #[error("failed to open points file at {path:?}: {source}")]
    OpenPoints {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The points file is not a JSON array of point records.
    #[error("failed to parse points JSON at {path:?}: {source}")]
    ParsePoints {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A point record was rejected by the working set.
    #[error("point {index} in {path:?} is invalid: {source}")]
    InvalidPoint {
        path: Utf8PathBuf,
        index: usize,
        #[source]
        source: PointSetError,
    },
    /// The solver rejected the points.
    #[error("solver failed: {source}")]
    Solve { source: SolveError },
    /// Serialising the solution failed.
    #[error("failed to serialise solution: {0}")]
    SerialiseSolution(#[source] serde_json::Error),
    /// Writing the solve output failed.
    #[error("failed to write solve output: {0}")]
    WriteSolveOutput(#[source] std::io::Error),
}
