//! Solver abstraction and the solution it produces.
//!
//! A [`Solver`] turns a point slice into a [`Solution`] that borrows those
//! points. [`measure`] builds the same report for a tour the host already
//! holds.

use std::time::Duration;

use geo::Coord;
use thiserror::Error;

use crate::{GeoPoint, Leg, MIN_POINTS, RouteMetrics, Tour, TourError, metrics};

/// Runtime statistics describing how a solve went.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Wall-clock time spent inside the solver.
    pub solve_time: Duration,
    /// Length of the constructed tour before local search, in miles.
    pub initial_miles: f64,
    /// Full improvement passes run, including the final pass that found no move.
    pub passes: usize,
    /// Accepted improving moves across all passes.
    pub improving_moves: usize,
}

/// A solved tour with its directions table.
///
/// The solution borrows the caller's points; it never copies or mutates them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution<'a> {
    /// Visiting order as indices into the solved slice.
    pub tour: Tour,
    /// Points in visiting order.
    pub route: Vec<&'a GeoPoint>,
    /// Legs in visiting order, closing back to the start.
    pub legs: Vec<Leg<'a>>,
    /// Length of the closed tour in statute miles.
    pub total_miles: f64,
    /// Solver statistics.
    pub diagnostics: Diagnostics,
}

impl<'a> Solution<'a> {
    /// Assemble a solution by measuring `tour` over `points`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::LengthMismatch`] when `tour` was built for a
    /// slice of a different size.
    pub fn from_tour(
        points: &'a [GeoPoint],
        tour: Tour,
        diagnostics: Diagnostics,
    ) -> Result<Self, TourError> {
        let RouteMetrics { legs, total_miles } = RouteMetrics::evaluate(points, &tour)?;
        let route = tour.resolve(points);
        Ok(Self {
            tour,
            route,
            legs,
            total_miles,
            diagnostics,
        })
    }

    /// Point names in visiting order.
    #[must_use]
    pub fn names(&self) -> Vec<&'a str> {
        self.route.iter().map(|point| point.name.as_str()).collect()
    }

    /// Closed polyline through the route, ending back at the start.
    #[must_use]
    pub fn route_coordinates(&self) -> Vec<Coord<f64>> {
        let mut coords: Vec<Coord<f64>> = self.route.iter().map(|point| point.location).collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        coords
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Fewer than [`MIN_POINTS`] points were supplied.
    #[error("at least {MIN_POINTS} points are required to solve, found {found}")]
    InsufficientPoints {
        /// Number of points supplied.
        found: usize,
    },
    /// A tour produced during the solve broke the permutation invariant.
    #[error("solver produced an invalid tour: {0}")]
    InvalidTour(#[from] TourError),
}

/// Check the point-count precondition shared by every solver.
///
/// # Examples
/// ```
/// use geotour_core::{GeoPoint, SolveError, ensure_solvable};
///
/// let one = vec![GeoPoint::new("alone", 0.0, 0.0)];
/// assert_eq!(
///     ensure_solvable(&one),
///     Err(SolveError::InsufficientPoints { found: 1 })
/// );
/// ```
pub const fn ensure_solvable(points: &[GeoPoint]) -> Result<(), SolveError> {
    if points.len() < MIN_POINTS {
        return Err(SolveError::InsufficientPoints {
            found: points.len(),
        });
    }
    Ok(())
}

/// Find a short closed tour through a set of points.
///
/// Implementations must return [`SolveError::InsufficientPoints`] for fewer
/// than [`MIN_POINTS`] points rather than panicking, and must hand back a
/// tour that visits every input point exactly once.
/// Solvers must be `Send + Sync` so hosts can run independent solves on
/// separate threads.
pub trait Solver: Send + Sync {
    /// Solve the tour for `points`.
    fn solve<'a>(&self, points: &'a [GeoPoint]) -> Result<Solution<'a>, SolveError>;
}

/// Measure a route directly, without solving.
///
/// Useful for hosts that want to report directions for a tour they already
/// hold, such as one restored after an abandoned solve.
///
/// # Errors
///
/// Returns [`SolveError::InvalidTour`] when `tour` does not visit every
/// point of `points` exactly once.
///
/// # Examples
/// ```
/// use geotour_core::{GeoPoint, SolveError, Tour, TourError, measure};
///
/// # fn main() -> Result<(), SolveError> {
/// let points = vec![
///     GeoPoint::new("a", 0.0, 0.0),
///     GeoPoint::new("b", 0.0, 1.0),
///     GeoPoint::new("c", 1.0, 1.0),
/// ];
/// let solution = measure(&points, Tour::new(vec![2, 0, 1], 3)?)?;
/// assert_eq!(solution.names(), vec!["c", "a", "b"]);
///
/// let short = Tour::identity(2)?;
/// assert_eq!(
///     measure(&points, short).err(),
///     Some(SolveError::InvalidTour(TourError::LengthMismatch {
///         expected: 3,
///         found: 2,
///     }))
/// );
/// # Ok(())
/// # }
/// ```
pub fn measure<'a>(points: &'a [GeoPoint], tour: Tour) -> Result<Solution<'a>, SolveError> {
    let initial_miles = metrics::route_length(points, &tour)?;
    let solution = Solution::from_tour(
        points,
        tour,
        Diagnostics {
            initial_miles,
            ..Diagnostics::default()
        },
    )?;
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::unit_square;
    use rstest::rstest;

    struct InputOrderSolver;

    impl Solver for InputOrderSolver {
        fn solve<'a>(&self, points: &'a [GeoPoint]) -> Result<Solution<'a>, SolveError> {
            ensure_solvable(points)?;
            let tour = Tour::identity(points.len())?;
            measure(points, tour)
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn rejects_fewer_than_two_points(#[case] count: usize) {
        let points: Vec<_> = unit_square().into_iter().take(count).collect();
        let err = InputOrderSolver
            .solve(&points)
            .expect_err("too few points should fail");
        assert_eq!(err, SolveError::InsufficientPoints { found: count });
    }

    #[rstest]
    fn solution_reports_route_and_legs() {
        let points = unit_square();
        let solution = InputOrderSolver.solve(&points).expect("square solves");
        assert_eq!(solution.names(), vec!["A", "B", "C", "D"]);
        assert_eq!(solution.legs.len(), 4);
        assert_eq!(solution.total_miles, solution.diagnostics.initial_miles);
    }

    #[rstest]
    fn route_coordinates_close_the_loop() {
        let points = unit_square();
        let solution = InputOrderSolver.solve(&points).expect("square solves");
        let coords = solution.route_coordinates();
        assert_eq!(coords.len(), 5);
        assert_eq!(coords.first(), coords.last());
    }

    #[rstest]
    #[case(3)]
    #[case(5)]
    fn measure_rejects_tours_sized_for_another_slice(#[case] stops: usize) {
        let points = unit_square();
        let tour = Tour::identity(stops).expect("valid tour");
        let err = measure(&points, tour).expect_err("mismatched tour");
        assert_eq!(
            err,
            SolveError::InvalidTour(TourError::LengthMismatch {
                expected: points.len(),
                found: stops,
            })
        );
    }

    #[rstest]
    fn from_tour_rejects_a_short_tour() {
        let points = unit_square();
        let tour = Tour::identity(3).expect("valid tour");
        let err = Solution::from_tour(&points, tour, Diagnostics::default())
            .expect_err("tour skips a point");
        assert_eq!(err, TourError::LengthMismatch { expected: 4, found: 3 });
    }

    #[rstest]
    fn insufficient_points_message_is_actionable() {
        let err = SolveError::InsufficientPoints { found: 1 };
        assert_eq!(
            err.to_string(),
            "at least 2 points are required to solve, found 1"
        );
    }

    #[rstest]
    fn solver_is_object_safe() {
        let solver: Box<dyn Solver> = Box::new(InputOrderSolver);
        let points = unit_square();
        assert!(solver.solve(&points).is_ok());
    }
}
