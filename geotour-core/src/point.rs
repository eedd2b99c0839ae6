//! Named geographic points.

use geo::{Coord, Point};

use crate::geodesy;

/// How a point entered the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointOrigin {
    /// Entered with an explicit, caller-chosen name.
    #[default]
    Named,
    /// Picked on a map and named by its position among map-selected points.
    MapSelected,
}

/// A location to visit.
///
/// Coordinates are WGS84 degrees with `x = longitude` and `y = latitude`,
/// matching the convention used by [`geo`].
///
/// # Examples
/// ```
/// use geotour_core::GeoPoint;
///
/// let paris = GeoPoint::new("Paris", 48.8566, 2.3522);
/// assert_eq!(paris.name, "Paris");
/// assert_eq!(paris.latitude(), 48.8566);
/// assert_eq!(paris.longitude(), 2.3522);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Display name. Map-selected points carry their sequence number.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Provenance of the point.
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: PointOrigin,
}

impl GeoPoint {
    /// Construct a named point from latitude and longitude in degrees.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            location: Coord {
                x: longitude,
                y: latitude,
            },
            origin: PointOrigin::Named,
        }
    }

    /// Construct a map-selected point.
    ///
    /// # Examples
    /// ```
    /// use geotour_core::{GeoPoint, PointOrigin};
    ///
    /// let clicked = GeoPoint::map_selected("3", 51.5, -0.12);
    /// assert_eq!(clicked.origin, PointOrigin::MapSelected);
    /// assert!(clicked.is_map_selected());
    /// ```
    pub fn map_selected(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            origin: PointOrigin::MapSelected,
            ..Self::new(name, latitude, longitude)
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Whether the point was picked on a map rather than named by hand.
    #[must_use]
    pub const fn is_map_selected(&self) -> bool {
        matches!(self.origin, PointOrigin::MapSelected)
    }

    /// The location as a [`geo::Point`].
    #[must_use]
    pub fn as_point(&self) -> Point<f64> {
        Point::from(self.location)
    }

    /// Geodesic distance to `other` in statute miles.
    ///
    /// See [`geodesy::distance_miles`].
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        geodesy::distance_miles(self, other)
    }

    /// Initial compass bearing towards `other` in degrees.
    ///
    /// See [`geodesy::bearing_degrees`].
    #[must_use]
    pub fn bearing_to(&self, other: &Self) -> f64 {
        geodesy::bearing_degrees(self, other)
    }
}
