//! Pairwise geodesic distances for a fixed point set.

use crate::{GeoPoint, geodesy::distance_miles};

/// Square matrix of geodesic distances in statute miles.
///
/// `miles(i, j)` is the distance between `points[i]` and `points[j]` for the
/// slice the matrix was built from. Each unordered pair is solved once, so
/// the matrix is exactly symmetric with a zero diagonal.
///
/// # Examples
/// ```
/// use geotour_core::{DistanceMatrix, GeoPoint};
///
/// let points = vec![
///     GeoPoint::new("a", 0.0, 0.0),
///     GeoPoint::new("b", 0.0, 1.0),
/// ];
/// let matrix = DistanceMatrix::from_points(&points);
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.miles(0, 1), matrix.miles(1, 0));
/// assert_eq!(matrix.miles(1, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Solve every pairwise distance for `points`.
    #[must_use]
    pub fn from_points(points: &[GeoPoint]) -> Self {
        let size = points.len();
        let mut cells = vec![0.0; size.saturating_mul(size)];
        for (i, from) in points.iter().enumerate() {
            for (j, to) in points.iter().enumerate().skip(i.saturating_add(1)) {
                let miles = distance_miles(from, to);
                for (row, col) in [(i, j), (j, i)] {
                    if let Some(cell) = cells.get_mut(row * size + col) {
                        *cell = miles;
                    }
                }
            }
        }
        Self { size, cells }
    }

    /// Number of points covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance from point `from` to point `to`, if both indices are in range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.cells.get(from * self.size + to).copied()
    }

    /// Distance from point `from` to point `to`.
    ///
    /// Out-of-range indices read as zero; callers index through a validated
    /// [`Tour`](crate::Tour).
    #[must_use]
    pub fn miles(&self, from: usize, to: usize) -> f64 {
        self.get(from, to).unwrap_or_else(|| {
            debug_assert!(false, "distance matrix index ({from}, {to}) out of range");
            0.0
        })
    }

    /// Length of the closed cycle visiting `order`, including the leg from
    /// the last index back to the first.
    ///
    /// # Examples
    /// ```
    /// use geotour_core::{DistanceMatrix, GeoPoint};
    ///
    /// let points = vec![
    ///     GeoPoint::new("a", 0.0, 0.0),
    ///     GeoPoint::new("b", 0.0, 1.0),
    /// ];
    /// let matrix = DistanceMatrix::from_points(&points);
    /// let there_and_back = matrix.route_length(&[0, 1]);
    /// assert_eq!(there_and_back, 2.0 * matrix.miles(0, 1));
    /// ```
    #[must_use]
    pub fn route_length(&self, order: &[usize]) -> f64 {
        order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(&from, &to)| self.miles(from, to))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::unit_square;
    use rstest::rstest;

    #[rstest]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let points = unit_square();
        let matrix = DistanceMatrix::from_points(&points);
        for i in 0..points.len() {
            assert_eq!(matrix.miles(i, i), 0.0);
            for j in 0..points.len() {
                assert_eq!(matrix.miles(i, j), matrix.miles(j, i));
            }
        }
    }

    #[rstest]
    fn cells_match_direct_distance() {
        let points = unit_square();
        let matrix = DistanceMatrix::from_points(&points);
        for (i, from) in points.iter().enumerate() {
            for (j, to) in points.iter().enumerate() {
                assert_eq!(matrix.get(i, j), Some(from.distance_to(to)));
            }
        }
    }

    #[rstest]
    fn out_of_range_lookup_is_none() {
        let matrix = DistanceMatrix::from_points(&unit_square());
        assert_eq!(matrix.get(4, 0), None);
        assert_eq!(matrix.get(0, 4), None);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[2])]
    fn degenerate_orders_have_zero_length(#[case] order: &[usize]) {
        let matrix = DistanceMatrix::from_points(&unit_square());
        assert_eq!(matrix.route_length(order), 0.0);
    }

    #[rstest]
    fn route_length_closes_the_cycle() {
        let matrix = DistanceMatrix::from_points(&unit_square());
        let expected = matrix.miles(0, 1) + matrix.miles(1, 2) + matrix.miles(2, 3) + matrix.miles(3, 0);
        assert_eq!(matrix.route_length(&[0, 1, 2, 3]), expected);
    }

    #[rstest]
    fn empty_matrix_reports_empty() {
        let matrix = DistanceMatrix::from_points(&[]);
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
    }
}
