//! Core domain types for the geotour engine.
//!
//! The crate models named geographic points, closed tours over them and the
//! measurements reported for a tour: geodesic leg distances in statute miles,
//! initial compass bearings and the total route length. Solvers implement
//! the [`Solver`] trait; the default implementation lives in
//! `geotour-solver-local`.
//!
//! Callers own their points. Every operation here borrows a slice of
//! [`GeoPoint`] values and never retains or mutates it across calls.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geodesy;
mod matrix;
pub mod metrics;
mod point;
mod point_set;
mod solver;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use matrix::DistanceMatrix;
pub use metrics::{Leg, RouteMetrics};
pub use point::{GeoPoint, PointOrigin};
pub use point_set::{PointSet, PointSetError};
pub use solver::{Diagnostics, SolveError, Solution, Solver, ensure_solvable, measure};
pub use tour::{MIN_POINTS, Tour, TourError};
