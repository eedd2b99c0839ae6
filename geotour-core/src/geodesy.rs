//! Distance and bearing between points on the Earth's surface.
//!
//! Distances are geodesics on the WGS-84 ellipsoid, solved with Karney's
//! iterative algorithm through [`geo::Geodesic`]. Bearings use the spherical
//! forward-azimuth formula through [`geo::Haversine`]. The two models are not
//! mutually consistent: the initial heading of the ellipsoidal geodesic can
//! differ slightly from the spherical bearing reported alongside it.

use geo::{Bearing, Coord, Distance, Geodesic, Haversine};

use crate::GeoPoint;

/// Metres in one statute mile.
pub const METRES_PER_MILE: f64 = 1_609.344;

const FULL_TURN_DEGREES: f64 = 360.0;

/// Geodesic distance between two points in statute miles.
///
/// The result is non-negative, exactly symmetric and zero when both points
/// share the same coordinates.
///
/// # Examples
/// ```
/// use geotour_core::{GeoPoint, geodesy::distance_miles};
///
/// let a = GeoPoint::new("a", 0.0, 0.0);
/// let b = GeoPoint::new("b", 0.0, 1.0);
/// let miles = distance_miles(&a, &b);
/// assert!((miles - 69.17).abs() < 0.01);
/// assert_eq!(miles, distance_miles(&b, &a));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "geodesic metres are converted to statute miles"
)]
pub fn distance_miles(a: &GeoPoint, b: &GeoPoint) -> f64 {
    if a.location == b.location {
        return 0.0;
    }
    // Solve in a canonical argument order so both directions agree to the bit.
    let (origin, destination) = if precedes(a.location, b.location) {
        (a, b)
    } else {
        (b, a)
    };
    Geodesic.distance(origin.as_point(), destination.as_point()) / METRES_PER_MILE
}

/// Initial compass bearing from `from` towards `to`, in `[0, 360)` degrees.
///
/// Coincident points have no defined heading and report `0`.
///
/// # Examples
/// ```
/// use geotour_core::{GeoPoint, geodesy::bearing_degrees};
///
/// let origin = GeoPoint::new("origin", 0.0, 0.0);
/// let east = GeoPoint::new("east", 0.0, 1.0);
/// assert!((bearing_degrees(&origin, &east) - 90.0).abs() < 1e-9);
/// assert!((bearing_degrees(&east, &origin) - 270.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn bearing_degrees(from: &GeoPoint, to: &GeoPoint) -> f64 {
    if from.location == to.location {
        return 0.0;
    }
    fold_bearing(Haversine.bearing(from.as_point(), to.as_point()))
}

#[expect(
    clippy::float_arithmetic,
    reason = "bearings are folded into a single turn"
)]
fn fold_bearing(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(FULL_TURN_DEGREES);
    // `rem_euclid` rounds tiny negative inputs up to a full turn.
    if folded >= FULL_TURN_DEGREES {
        0.0
    } else {
        folded
    }
}

fn precedes(a: Coord<f64>, b: Coord<f64>) -> bool {
    (a.y, a.x) < (b.y, b.x)
}
