//! Local-search tour solver for geotour.
//!
//! This crate provides [`LocalSearchSolver`], the default implementation of
//! the [`Solver`](geotour_core::Solver) trait. A tour is built greedily by
//! [`NearestNeighborBuilder`] and then shortened by [`TwoOptOptimizer`] until
//! a full pass over every non-adjacent edge pair finds no improving move.
//!
//! Both stages work on a precomputed [`DistanceMatrix`](geotour_core::DistanceMatrix)
//! and an index permutation, so the caller's points are borrowed and never
//! copied or mutated. The result is a heuristic tour, not a proven optimum.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod nearest_neighbor;
mod solver;
mod two_opt;

pub use nearest_neighbor::NearestNeighborBuilder;
pub use solver::{LocalSearchConfig, LocalSearchSolver, solve};
pub use two_opt::{DEFAULT_MIN_IMPROVEMENT_MILES, TwoOptOptimizer, TwoOptOutcome};
