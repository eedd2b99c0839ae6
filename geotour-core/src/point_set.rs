//! Caller-owned working set of points awaiting a solve.
//!
//! Points arrive either with a name typed by the user or as map clicks.
//! Map-selected points are named by their position among map-selected
//! points (`"1"`, `"2"`, ...) and renumbered whenever one of them is removed,
//! so the sequence never has gaps.

use thiserror::Error;

use crate::GeoPoint;

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;

/// Errors returned when editing a [`PointSet`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointSetError {
    /// The supplied name was empty or whitespace.
    #[error("point name cannot be empty")]
    EmptyName,
    /// Latitude was not a finite value in `[-90, 90]`.
    #[error("latitude {0} must be a finite value between -90 and 90 degrees")]
    InvalidLatitude(f64),
    /// Longitude was not a finite value in `[-180, 180]`.
    #[error("longitude {0} must be a finite value between -180 and 180 degrees")]
    InvalidLongitude(f64),
    /// No point exists at the requested position.
    #[error("no point at position {index}; the set holds {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of points held.
        len: usize,
    },
}

/// Ordered collection of points supplied to a solver.
///
/// # Examples
/// ```
/// use geotour_core::PointSet;
///
/// # fn main() -> Result<(), geotour_core::PointSetError> {
/// let mut set = PointSet::new();
/// set.add_named("Lyon", 45.764, 4.8357)?;
/// set.add_map_selected(45.19, 5.72)?;
/// set.add_map_selected(44.93, 4.89)?;
///
/// set.remove(1)?;
/// let names: Vec<_> = set.points().iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, vec!["Lyon", "1"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<GeoPoint>,
    map_selected: usize,
}

impl PointSet {
    /// Construct an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point with an explicit name.
    pub fn add_named(
        &mut self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<&GeoPoint, PointSetError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PointSetError::EmptyName);
        }
        validate_coordinates(latitude, longitude)?;
        Ok(self.push(GeoPoint::new(trimmed, latitude, longitude)))
    }

    /// Append a map-selected point, naming it with the next sequence number.
    pub fn add_map_selected(
        &mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<&GeoPoint, PointSetError> {
        validate_coordinates(latitude, longitude)?;
        self.map_selected = self.map_selected.saturating_add(1);
        let name = self.map_selected.to_string();
        Ok(self.push(GeoPoint::map_selected(name, latitude, longitude)))
    }

    /// Remove the point at `index`, renumbering map-selected points if needed.
    pub fn remove(&mut self, index: usize) -> Result<GeoPoint, PointSetError> {
        if index >= self.points.len() {
            return Err(PointSetError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        let removed = self.points.remove(index);
        if removed.is_map_selected() {
            self.map_selected = self.map_selected.saturating_sub(1);
            self.renumber_map_selected();
        }
        Ok(removed)
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
        self.map_selected = 0;
    }

    /// Points in insertion order.
    #[must_use]
    pub const fn points(&self) -> &[GeoPoint] {
        self.points.as_slice()
    }

    /// Number of points held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of map-selected points held.
    #[must_use]
    pub const fn map_selected_count(&self) -> usize {
        self.map_selected
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "the index refers to the element pushed just before"
    )]
    fn push(&mut self, point: GeoPoint) -> &GeoPoint {
        let index = self.points.len();
        self.points.push(point);
        &self.points[index]
    }

    fn renumber_map_selected(&mut self) {
        let map_points = self.points.iter_mut().filter(|p| p.is_map_selected());
        for (number, point) in (1_usize..).zip(map_points) {
            point.name = number.to_string();
        }
    }
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), PointSetError> {
    if !latitude.is_finite() || latitude.abs() > LATITUDE_LIMIT {
        return Err(PointSetError::InvalidLatitude(latitude));
    }
    if !longitude.is_finite() || longitude.abs() > LONGITUDE_LIMIT {
        return Err(PointSetError::InvalidLongitude(longitude));
    }
    Ok(())
}
