//! Closed tours expressed as index permutations over a point slice.

use thiserror::Error;

use crate::GeoPoint;

/// Smallest point set that forms a tour.
pub const MIN_POINTS: usize = 2;

/// Errors returned by [`Tour::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// Fewer than [`MIN_POINTS`] points were supplied.
    #[error("a tour needs at least {MIN_POINTS} points, found {found}")]
    TooShort {
        /// Number of points supplied.
        found: usize,
    },
    /// The order does not visit as many stops as there are points.
    #[error("tour visits {found} stops but the point set holds {expected}")]
    LengthMismatch {
        /// Size of the point set.
        expected: usize,
        /// Length of the proposed order.
        found: usize,
    },
    /// An index does not refer to a point in the set.
    #[error("tour index {index} is outside a point set of {len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Size of the point set.
        len: usize,
    },
    /// A point is visited more than once.
    #[error("tour visits point {index} more than once")]
    DuplicateIndex {
        /// Index visited twice.
        index: usize,
    },
}

/// An ordered, cyclic visit of every point in a set.
///
/// The tour stores indices into the caller's point slice. Every index in
/// `0..n` appears exactly once and the stop after the last one is the first.
///
/// # Examples
/// ```
/// use geotour_core::Tour;
///
/// # fn main() -> Result<(), geotour_core::TourError> {
/// let tour = Tour::new(vec![2, 0, 1], 3)?;
/// assert_eq!(tour.order(), &[2, 0, 1]);
/// assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(2, 0), (0, 1), (1, 2)]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Validate `order` as a permutation of `0..point_count`.
    pub fn new(order: Vec<usize>, point_count: usize) -> Result<Self, TourError> {
        if point_count < MIN_POINTS {
            return Err(TourError::TooShort { found: point_count });
        }
        if order.len() != point_count {
            return Err(TourError::LengthMismatch {
                expected: point_count,
                found: order.len(),
            });
        }
        let mut seen = vec![false; point_count];
        for &index in &order {
            match seen.get_mut(index) {
                None => {
                    return Err(TourError::IndexOutOfRange {
                        index,
                        len: point_count,
                    });
                }
                Some(true) => return Err(TourError::DuplicateIndex { index }),
                Some(visited) => *visited = true,
            }
        }
        Ok(Self { order })
    }

    /// The tour visiting points in their input order.
    pub fn identity(point_count: usize) -> Result<Self, TourError> {
        Self::new((0..point_count).collect(), point_count)
    }

    /// Point indices in visiting order.
    #[must_use]
    pub const fn order(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Consume the tour, returning its visiting order.
    #[must_use]
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of stops.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: a valid tour has at least [`MIN_POINTS`] stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check that the tour visits exactly `point_count` points.
    ///
    /// A valid tour is a permutation of `0..len`, so matching lengths mean
    /// every index is in range and no point of the set is skipped.
    ///
    /// # Examples
    /// ```
    /// use geotour_core::{Tour, TourError};
    ///
    /// # fn main() -> Result<(), TourError> {
    /// let tour = Tour::identity(3)?;
    /// assert!(tour.ensure_covers(3).is_ok());
    /// assert_eq!(
    ///     tour.ensure_covers(4),
    ///     Err(TourError::LengthMismatch { expected: 4, found: 3 })
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub const fn ensure_covers(&self, point_count: usize) -> Result<(), TourError> {
        if self.order.len() != point_count {
            return Err(TourError::LengthMismatch {
                expected: point_count,
                found: self.order.len(),
            });
        }
        Ok(())
    }

    /// Directed legs `(from, to)` in visiting order, ending with the leg that
    /// returns to the first stop.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order
            .iter()
            .copied()
            .zip(self.order.iter().copied().cycle().skip(1))
    }

    /// Reverse the stops at positions `start..=end` in place.
    ///
    /// Returns `false` and leaves the tour untouched when the range is empty
    /// or runs past the last stop.
    ///
    /// # Examples
    /// ```
    /// use geotour_core::Tour;
    ///
    /// # fn main() -> Result<(), geotour_core::TourError> {
    /// let mut tour = Tour::identity(5)?;
    /// assert!(tour.reverse_segment(1, 3));
    /// assert_eq!(tour.order(), &[0, 3, 2, 1, 4]);
    /// assert!(!tour.reverse_segment(3, 5));
    /// # Ok(())
    /// # }
    /// ```
    pub fn reverse_segment(&mut self, start: usize, end: usize) -> bool {
        if start > end {
            return false;
        }
        match self.order.get_mut(start..=end) {
            Some(segment) => {
                segment.reverse();
                true
            }
            None => false,
        }
    }

    /// Resolve the tour against the slice it indexes.
    ///
    /// Indices missing from `points` are skipped, so pass the same slice the
    /// tour was built for.
    #[must_use]
    pub fn resolve<'a>(&self, points: &'a [GeoPoint]) -> Vec<&'a GeoPoint> {
        self.order
            .iter()
            .filter_map(|&index| points.get(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![0, 1], 2)]
    #[case(vec![3, 1, 0, 2], 4)]
    fn accepts_permutations(#[case] order: Vec<usize>, #[case] count: usize) {
        let tour = Tour::new(order.clone(), count).expect("valid permutation");
        assert_eq!(tour.order(), order.as_slice());
        assert_eq!(tour.len(), count);
        assert!(!tour.is_empty());
    }

    #[rstest]
    #[case(vec![], 0, TourError::TooShort { found: 0 })]
    #[case(vec![0], 1, TourError::TooShort { found: 1 })]
    #[case(vec![0, 1], 3, TourError::LengthMismatch { expected: 3, found: 2 })]
    #[case(vec![0, 3, 1], 3, TourError::IndexOutOfRange { index: 3, len: 3 })]
    #[case(vec![0, 1, 1], 3, TourError::DuplicateIndex { index: 1 })]
    fn rejects_non_permutations(
        #[case] order: Vec<usize>,
        #[case] count: usize,
        #[case] expected: TourError,
    ) {
        let err = Tour::new(order, count).expect_err("invalid permutation");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn edges_wrap_to_start() {
        let tour = Tour::identity(4).expect("four stops");
        let edges: Vec<_> = tour.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[rstest]
    #[case(0, 3, vec![3, 2, 1, 0])]
    #[case(2, 2, vec![0, 1, 2, 3])]
    #[case(1, 2, vec![0, 2, 1, 3])]
    fn reverse_segment_is_inclusive(
        #[case] start: usize,
        #[case] end: usize,
        #[case] expected: Vec<usize>,
    ) {
        let mut tour = Tour::identity(4).expect("four stops");
        assert!(tour.reverse_segment(start, end));
        assert_eq!(tour.order(), expected.as_slice());
    }

    #[rstest]
    #[case(2, 1)]
    #[case(1, 4)]
    fn reverse_segment_rejects_bad_ranges(#[case] start: usize, #[case] end: usize) {
        let mut tour = Tour::identity(4).expect("four stops");
        assert!(!tour.reverse_segment(start, end));
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
    }

    #[rstest]
    #[case(3, 3, None)]
    #[case(3, 4, Some(TourError::LengthMismatch { expected: 4, found: 3 }))]
    #[case(5, 4, Some(TourError::LengthMismatch { expected: 4, found: 5 }))]
    fn ensure_covers_compares_against_the_point_count(
        #[case] stops: usize,
        #[case] point_count: usize,
        #[case] expected: Option<TourError>,
    ) {
        let tour = Tour::identity(stops).expect("valid tour");
        assert_eq!(tour.ensure_covers(point_count).err(), expected);
    }

    #[rstest]
    fn resolve_follows_visiting_order() {
        let points = vec![
            GeoPoint::new("a", 0.0, 0.0),
            GeoPoint::new("b", 1.0, 1.0),
            GeoPoint::new("c", 2.0, 2.0),
        ];
        let tour = Tour::new(vec![2, 0, 1], 3).expect("valid permutation");
        let names: Vec<_> = tour.resolve(&points).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
