//! Greedy construction of an initial tour.

use geotour_core::{DistanceMatrix, Tour, TourError};

/// Builds a tour by always travelling to the closest unvisited point.
///
/// The tour starts at the first point. When several unvisited points are
/// equally close, the one listed first in the input wins, so the same input
/// order always produces the same tour.
///
/// # Examples
/// ```
/// use geotour_core::{DistanceMatrix, GeoPoint};
/// use geotour_solver_local::NearestNeighborBuilder;
///
/// # fn main() -> Result<(), geotour_core::TourError> {
/// let points = vec![
///     GeoPoint::new("start", 0.0, 0.0),
///     GeoPoint::new("far", 0.0, 3.0),
///     GeoPoint::new("near", 0.0, 1.0),
/// ];
/// let matrix = DistanceMatrix::from_points(&points);
/// let tour = NearestNeighborBuilder.build(&matrix)?;
/// assert_eq!(tour.order(), &[0, 2, 1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborBuilder;

impl NearestNeighborBuilder {
    /// Construct the greedy tour over every point covered by `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::TooShort`] when the matrix covers fewer than
    /// [`MIN_POINTS`](geotour_core::MIN_POINTS) points.
    pub fn build(&self, matrix: &DistanceMatrix) -> Result<Tour, TourError> {
        let size = matrix.len();
        let mut order = Vec::with_capacity(size);
        if size > 0 {
            order.push(0);
        }
        // Kept in input order so ties resolve to the earliest candidate.
        let mut unvisited: Vec<usize> = (1..size).collect();
        let mut current = 0;
        while let Some(position) = closest(matrix, current, &unvisited) {
            current = unvisited.remove(position);
            order.push(current);
        }
        Tour::new(order, size)
    }
}

/// Position within `candidates` of the point nearest to `from`.
fn closest(matrix: &DistanceMatrix, from: usize, candidates: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (position, &candidate) in candidates.iter().enumerate() {
        let miles = matrix.miles(from, candidate);
        if best.is_none_or(|(_, best_miles)| miles < best_miles) {
            best = Some((position, miles));
        }
    }
    best.map(|(position, _)| position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotour_core::GeoPoint;
    use geotour_core::test_support::{point, unit_square};
    use rstest::rstest;

    fn build(points: &[GeoPoint]) -> Result<Tour, TourError> {
        NearestNeighborBuilder.build(&DistanceMatrix::from_points(points))
    }

    #[rstest]
    fn unit_square_is_walked_around_its_edge() {
        let tour = build(&unit_square()).expect("square builds");
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
    }

    #[rstest]
    fn two_points_form_an_out_and_back_tour() {
        let points = vec![point("a", 10.0, 10.0), point("b", 11.0, 11.0)];
        let tour = build(&points).expect("pair builds");
        assert_eq!(tour.order(), &[0, 1]);
    }

    #[rstest]
    fn ties_go_to_the_first_listed_candidate() {
        let points = vec![
            point("start", 0.0, 0.0),
            point("first twin", 0.0, 1.0),
            point("second twin", 0.0, 1.0),
        ];
        let tour = build(&points).expect("triangle builds");
        assert_eq!(tour.order(), &[0, 1, 2]);
    }

    #[rstest]
    fn coincident_points_are_all_visited() {
        let points = vec![
            point("a", 5.0, 5.0),
            point("b", 5.0, 5.0),
            point("c", 5.0, 5.0),
        ];
        let tour = build(&points).expect("duplicates build");
        assert_eq!(tour.order(), &[0, 1, 2]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn too_few_points_are_rejected(#[case] count: usize) {
        let points: Vec<_> = unit_square().into_iter().take(count).collect();
        let err = build(&points).expect_err("too few points");
        assert_eq!(err, TourError::TooShort { found: count });
    }

    #[rstest]
    fn follows_the_line_outwards() {
        let points = vec![
            point("0", 0.0, 0.0),
            point("3", 0.0, 3.0),
            point("1", 0.0, 1.0),
            point("4", 0.0, 4.0),
            point("2", 0.0, 2.0),
        ];
        let tour = build(&points).expect("line builds");
        assert_eq!(tour.order(), &[0, 2, 4, 1, 3]);
    }
}
