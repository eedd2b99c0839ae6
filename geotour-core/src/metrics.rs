//! Read-only measurements over a finished tour.
//!
//! Every function here projects a [`Tour`] onto the point slice it indexes
//! and never mutates either. A tour sized for a different slice is rejected
//! with [`TourError::LengthMismatch`] rather than measured partially.

use crate::{GeoPoint, Tour, TourError, geodesy};

/// One directed leg of a tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Leg<'a> {
    /// Departure point.
    pub from: &'a GeoPoint,
    /// Arrival point, the tour successor of `from`.
    pub to: &'a GeoPoint,
    /// Geodesic distance in statute miles.
    pub distance_miles: f64,
    /// Initial compass bearing in degrees, `[0, 360)`.
    pub bearing_degrees: f64,
}

impl<'a> Leg<'a> {
    /// Measure the leg from `from` to `to`.
    #[must_use]
    pub fn between(from: &'a GeoPoint, to: &'a GeoPoint) -> Self {
        Self {
            from,
            to,
            distance_miles: geodesy::distance_miles(from, to),
            bearing_degrees: geodesy::bearing_degrees(from, to),
        }
    }
}

/// Total length and per-leg breakdown of a tour.
///
/// # Examples
/// ```
/// use geotour_core::{GeoPoint, RouteMetrics, Tour};
///
/// # fn main() -> Result<(), geotour_core::TourError> {
/// let points = vec![
///     GeoPoint::new("A", 0.0, 0.0),
///     GeoPoint::new("B", 0.0, 1.0),
///     GeoPoint::new("C", 1.0, 1.0),
/// ];
/// let tour = Tour::identity(points.len())?;
/// let metrics = RouteMetrics::evaluate(&points, &tour)?;
///
/// assert_eq!(metrics.legs.len(), 3);
/// assert_eq!(metrics.legs[2].from.name, "C");
/// assert_eq!(metrics.legs[2].to.name, "A");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteMetrics<'a> {
    /// Legs in visiting order, closing back to the first stop.
    pub legs: Vec<Leg<'a>>,
    /// Sum of every leg distance in statute miles.
    pub total_miles: f64,
}

impl<'a> RouteMetrics<'a> {
    /// Measure every leg of `tour` over `points`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::LengthMismatch`] when `tour` does not visit every
    /// point of `points`.
    pub fn evaluate(points: &'a [GeoPoint], tour: &Tour) -> Result<Self, TourError> {
        let legs = legs(points, tour)?;
        let total_miles = legs.iter().map(|leg| leg.distance_miles).sum();
        Ok(Self { legs, total_miles })
    }
}

/// Legs of `tour` in visiting order, including the closing leg.
///
/// # Errors
///
/// Returns [`TourError::LengthMismatch`] when `tour` does not visit every
/// point of `points`.
pub fn legs<'a>(points: &'a [GeoPoint], tour: &Tour) -> Result<Vec<Leg<'a>>, TourError> {
    tour.ensure_covers(points.len())?;
    Ok(tour
        .edges()
        .filter_map(|(from, to)| Some(Leg::between(points.get(from)?, points.get(to)?)))
        .collect())
}

/// Length of the closed tour in statute miles.
///
/// # Errors
///
/// Returns [`TourError::LengthMismatch`] when `tour` does not visit every
/// point of `points`.
pub fn route_length(points: &[GeoPoint], tour: &Tour) -> Result<f64, TourError> {
    tour.ensure_covers(points.len())?;
    Ok(tour
        .edges()
        .filter_map(|(from, to)| Some(geodesy::distance_miles(points.get(from)?, points.get(to)?)))
        .sum())
}
