//! Shared fixtures for unit, behaviour and property tests.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use crate::GeoPoint;

/// Construct a named point from latitude and longitude.
#[must_use]
pub fn point(name: &str, latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(name, latitude, longitude)
}

/// Corners of a one-degree square at the origin, in convex order.
///
/// Written as `(longitude, latitude)` the corners are `A(0,0)`, `B(0,1)`,
/// `C(1,1)` and `D(1,0)`, so `B` lies due north of `A`. A degree of latitude
/// at the equator is shorter than a degree of longitude, which makes `B` the
/// nearest neighbour of `A`. Reading the same labels as
/// `(latitude, longitude)` instead puts `D` due north of `A`, and the solved
/// tour walks the same perimeter the other way round, `A, D, C, B`.
#[must_use]
pub fn unit_square() -> Vec<GeoPoint> {
    vec![
        point("A", 0.0, 0.0),
        point("B", 1.0, 0.0),
        point("C", 1.0, 1.0),
        point("D", 0.0, 1.0),
    ]
}

/// The [`unit_square`] corners listed as `A, C, B, D`, whose input order
/// crosses itself.
#[must_use]
pub fn crossed_square() -> Vec<GeoPoint> {
    vec![
        point("A", 0.0, 0.0),
        point("C", 1.0, 1.0),
        point("B", 1.0, 0.0),
        point("D", 0.0, 1.0),
    ]
}
