//! Loading point files into a working set.
//!
//! A point file is a JSON array of records such as
//! `{ "name": "Paris", "lat": 48.8566, "lon": 2.3522 }`. Records without a
//! name are treated as map-selected and numbered in the order they appear.

use std::io::BufReader;

use camino::Utf8Path;
use geotour_core::{PointSet, PointSetError};
use serde::Deserialize;

use crate::CliError;
use crate::fs::open_utf8_file;

/// One entry of a point file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PointRecord {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(alias = "latitude")]
    pub(crate) lat: f64,
    #[serde(alias = "longitude", alias = "lng")]
    pub(crate) lon: f64,
}

/// Read and validate the points listed in `path`.
pub(crate) fn load_points(path: &Utf8Path) -> Result<PointSet, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPoints {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let records: Vec<PointRecord> =
        serde_json::from_reader(reader).map_err(|source| CliError::ParsePoints {
            path: path.to_path_buf(),
            source,
        })?;
    collect_points(records).map_err(|(index, source)| {
        log::warn!("rejected point {index} in {path}: {source}");
        CliError::InvalidPoint {
            path: path.to_path_buf(),
            index,
            source,
        }
    })
}

/// Add `records` to a fresh working set, reporting the position of the
/// first record it rejects.
pub(crate) fn collect_points(
    records: Vec<PointRecord>,
) -> Result<PointSet, (usize, PointSetError)> {
    let mut set = PointSet::new();
    for (index, record) in records.into_iter().enumerate() {
        let added = match record.name {
            Some(name) => set.add_named(&name, record.lat, record.lon).map(|_| ()),
            None => set.add_map_selected(record.lat, record.lon).map(|_| ()),
        };
        added.map_err(|source| (index, source))?;
    }
    Ok(set)
}
