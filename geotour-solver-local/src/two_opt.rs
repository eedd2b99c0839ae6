//! 2-opt local search over a closed tour.
//!
//! A move picks two non-adjacent edges `(t[i], t[i+1])` and `(t[j], t[j+1])`
//! and reconnects them by reversing the stops `t[i+1..=j]`. Passes sweep
//! every pair with `0 <= i <= n-3` and `i+2 <= j <= n-1`, adopting each
//! improving move as soon as it is found and carrying on over the updated
//! tour. The search stops at the first pass that adopts nothing.

use geotour_core::{DistanceMatrix, Tour};

/// Smallest length reduction, in miles, accepted as an improving move.
///
/// Reordering a sum of the same legs can change its last bits, so a tour
/// traversed backwards may measure a hair shorter than itself. The margin
/// keeps such a reversal from counting as a move. It also means candidates
/// within a nanomile of the current length are not adopted, which can
/// matter for clusters of near-coincident points. Pass `0.0` to
/// [`TwoOptOptimizer::new`] to accept every strictly shorter candidate.
pub const DEFAULT_MIN_IMPROVEMENT_MILES: f64 = 1e-9;

/// Fewest stops with a non-adjacent edge pair to exchange.
const MIN_EXCHANGE_STOPS: usize = 4;

/// Counters describing one run of [`TwoOptOptimizer::improve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoOptOutcome {
    /// Full passes run, including the last one that found no move.
    pub passes: usize,
    /// Moves adopted across all passes.
    pub improving_moves: usize,
}

/// Shortens a tour with first-improvement 2-opt until it converges.
///
/// The returned tour is never longer than the input tour.
///
/// # Examples
/// ```
/// use geotour_core::{DistanceMatrix, GeoPoint, Tour};
/// use geotour_solver_local::TwoOptOptimizer;
///
/// # fn main() -> Result<(), geotour_core::TourError> {
/// let points = vec![
///     GeoPoint::new("A", 0.0, 0.0),
///     GeoPoint::new("C", 1.0, 1.0),
///     GeoPoint::new("B", 1.0, 0.0),
///     GeoPoint::new("D", 0.0, 1.0),
/// ];
/// let matrix = DistanceMatrix::from_points(&points);
/// let crossed = Tour::identity(points.len())?;
///
/// let (tour, outcome) = TwoOptOptimizer::default().improve(&matrix, crossed);
/// assert_eq!(tour.order(), &[0, 2, 1, 3]);
/// assert_eq!(outcome.improving_moves, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptOptimizer {
    min_improvement_miles: f64,
}

impl Default for TwoOptOptimizer {
    fn default() -> Self {
        Self {
            min_improvement_miles: DEFAULT_MIN_IMPROVEMENT_MILES,
        }
    }
}

impl TwoOptOptimizer {
    /// Construct an optimizer that only adopts moves saving more than
    /// `min_improvement_miles`.
    ///
    /// Negative and NaN thresholds are treated as zero.
    #[must_use]
    pub fn new(min_improvement_miles: f64) -> Self {
        Self {
            min_improvement_miles: min_improvement_miles.max(0.0),
        }
    }

    /// Threshold a move must beat to be adopted.
    #[must_use]
    pub const fn min_improvement_miles(&self) -> f64 {
        self.min_improvement_miles
    }

    /// Run passes over `tour` until one adopts no move.
    ///
    /// `matrix` must be built from the point slice `tour` indexes. Tours with
    /// fewer than four stops, and tours whose size differs from the matrix,
    /// are returned unchanged without running a pass.
    #[must_use]
    pub fn improve(&self, matrix: &DistanceMatrix, mut tour: Tour) -> (Tour, TwoOptOutcome) {
        let mut outcome = TwoOptOutcome::default();
        if let Err(err) = tour.ensure_covers(matrix.len()) {
            log::warn!("skipping 2-opt: {err}");
            return (tour, outcome);
        }
        if tour.len() < MIN_EXCHANGE_STOPS {
            return (tour, outcome);
        }

        let mut current_miles = matrix.route_length(tour.order());
        loop {
            let moves = self.run_pass(matrix, &mut tour, &mut current_miles);
            outcome.passes += 1;
            outcome.improving_moves += moves;
            log::debug!(
                "2-opt pass {} adopted {moves} moves; tour is {current_miles:.3} miles",
                outcome.passes
            );
            if moves == 0 {
                return (tour, outcome);
            }
        }
    }

    fn run_pass(&self, matrix: &DistanceMatrix, tour: &mut Tour, current_miles: &mut f64) -> usize {
        let stops = tour.len();
        let mut moves = 0;
        for i in 0..stops.saturating_sub(2) {
            for j in i.saturating_add(2)..stops {
                let start = i.saturating_add(1);
                if !tour.reverse_segment(start, j) {
                    continue;
                }
                let candidate_miles = matrix.route_length(tour.order());
                if self.is_improvement(candidate_miles, *current_miles) {
                    *current_miles = candidate_miles;
                    moves += 1;
                } else {
                    tour.reverse_segment(start, j);
                }
            }
        }
        moves
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "moves are compared against a length threshold in miles"
    )]
    fn is_improvement(&self, candidate_miles: f64, current_miles: f64) -> bool {
        candidate_miles < current_miles - self.min_improvement_miles
    }
}
