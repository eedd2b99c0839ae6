//! `LocalSearchSolver` implementation combining greedy construction with 2-opt.

use std::time::Instant;

use geotour_core::{
    Diagnostics, DistanceMatrix, GeoPoint, SolveError, Solution, Solver, ensure_solvable,
};

use crate::{DEFAULT_MIN_IMPROVEMENT_MILES, NearestNeighborBuilder, TwoOptOptimizer};

/// Configuration for [`LocalSearchSolver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalSearchConfig {
    /// Smallest length reduction, in miles, that counts as an improving move.
    pub min_improvement_miles: f64,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            min_improvement_miles: DEFAULT_MIN_IMPROVEMENT_MILES,
        }
    }
}

/// Default solver: nearest-neighbour construction refined by 2-opt.
///
/// The solver holds no state between calls, so one instance can serve
/// concurrent solves over independent point sets.
#[derive(Debug, Clone, Default)]
pub struct LocalSearchSolver {
    config: LocalSearchConfig,
}

impl LocalSearchSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: LocalSearchConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &LocalSearchConfig {
        &self.config
    }
}

impl Solver for LocalSearchSolver {
    fn solve<'a>(&self, points: &'a [GeoPoint]) -> Result<Solution<'a>, SolveError> {
        ensure_solvable(points)?;
        let started_at = Instant::now();

        let matrix = DistanceMatrix::from_points(points);
        let initial = NearestNeighborBuilder.build(&matrix)?;
        let initial_miles = matrix.route_length(initial.order());

        let optimizer = TwoOptOptimizer::new(self.config.min_improvement_miles);
        let (tour, outcome) = optimizer.improve(&matrix, initial);

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            initial_miles,
            passes: outcome.passes,
            improving_moves: outcome.improving_moves,
        };
        let solution = Solution::from_tour(points, tour, diagnostics)?;
        log::info!(
            "solved {} points: {:.2} miles (from {:.2}) after {} passes in {:?}",
            points.len(),
            solution.total_miles,
            solution.diagnostics.initial_miles,
            solution.diagnostics.passes,
            solution.diagnostics.solve_time
        );
        Ok(solution)
    }
}

/// Solve `points` with a default [`LocalSearchSolver`].
///
/// # Errors
///
/// Returns [`SolveError::InsufficientPoints`] when fewer than
/// [`MIN_POINTS`](geotour_core::MIN_POINTS) points are supplied.
///
/// # Examples
/// ```
/// use geotour_core::GeoPoint;
///
/// # fn main() -> Result<(), geotour_core::SolveError> {
/// let points = vec![
///     GeoPoint::new("Paris", 48.8566, 2.3522),
///     GeoPoint::new("Lyon", 45.764, 4.8357),
///     GeoPoint::new("Marseille", 43.2965, 5.3698),
/// ];
/// let solution = geotour_solver_local::solve(&points)?;
/// assert_eq!(solution.legs.len(), 3);
/// assert_eq!(solution.names()[0], "Paris");
/// # Ok(())
/// # }
/// ```
pub fn solve(points: &[GeoPoint]) -> Result<Solution<'_>, SolveError> {
    LocalSearchSolver::default().solve(points)
}
