//! Facade crate for the geotour engine.
//!
//! This crate re-exports the core domain types and exposes the local-search
//! solver behind the `solver-local` feature, enabled by default.

#![forbid(unsafe_code)]

pub use geotour_core::{
    Diagnostics, DistanceMatrix, GeoPoint, Leg, MIN_POINTS, PointOrigin, PointSet, PointSetError,
    RouteMetrics, SolveError, Solution, Solver, Tour, TourError, ensure_solvable, geodesy,
    measure, metrics,
};

#[cfg(feature = "solver-local")]
pub use geotour_solver_local::{
    LocalSearchConfig, LocalSearchSolver, NearestNeighborBuilder, TwoOptOptimizer, TwoOptOutcome,
    solve,
};
