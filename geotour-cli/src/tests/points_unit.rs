//! Unit tests for loading point files.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::points::{PointRecord, collect_points, load_points};
use geotour_core::PointSetError;
use rstest::rstest;

fn record(name: Option<&str>, lat: f64, lon: f64) -> PointRecord {
    PointRecord {
        name: name.map(str::to_owned),
        lat,
        lon,
    }
}

#[rstest]
fn unnamed_records_are_numbered_as_map_selected() {
    let records = vec![
        record(None, 48.85, 2.35),
        record(Some("Depot"), 48.8, 2.3),
        record(None, 48.9, 2.4),
    ];
    let set = collect_points(records).expect("valid records");
    let names: Vec<&str> = set.points().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["1", "Depot", "2"]);
    assert_eq!(set.map_selected_count(), 2);
}

#[rstest]
#[case::blank_name(record(Some(" "), 0.0, 0.0), PointSetError::EmptyName)]
#[case::latitude(record(Some("x"), 91.0, 0.0), PointSetError::InvalidLatitude(91.0))]
#[case::longitude(record(None, 0.0, -200.0), PointSetError::InvalidLongitude(-200.0))]
fn first_bad_record_is_reported_with_its_position(
    #[case] bad: PointRecord,
    #[case] expected: PointSetError,
) {
    let records = vec![record(Some("ok"), 1.0, 1.0), bad];
    let (index, err) = collect_points(records).expect_err("bad record");
    assert_eq!(index, 1);
    assert_eq!(err, expected);
}

#[rstest]
fn load_points_decodes_aliases() {
    let workspace = Workspace::new();
    let path = workspace.path("points.json");
    write_utf8(
        &path,
        br#"[{"name": "Bern", "latitude": 46.95, "longitude": 7.45}, {"lat": 47.0, "lng": 8.0}]"#,
    );

    let set = load_points(&path).expect("points load");
    assert_eq!(set.len(), 2);
    let bern = &set.points()[0];
    assert_eq!(bern.name, "Bern");
    assert!((bern.latitude() - 46.95).abs() < 1e-12);
    assert!(set.points()[1].is_map_selected());
}

#[rstest]
fn load_points_rejects_invalid_json() {
    let workspace = Workspace::new();
    let path = workspace.path("points.json");
    write_utf8(&path, b"{ not valid json");

    let err = load_points(&path).expect_err("invalid json should error");
    match err {
        CliError::ParsePoints { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParsePoints, found {other:?}"),
    }
}

#[rstest]
fn load_points_rejects_unknown_fields() {
    let workspace = Workspace::new();
    let path = workspace.path("points.json");
    write_utf8(&path, br#"[{"name": "x", "lat": 1.0, "lon": 1.0, "alt": 3.0}]"#);

    let err = load_points(&path).expect_err("unknown field should error");
    assert!(matches!(err, CliError::ParsePoints { .. }));
}

#[rstest]
fn load_points_reports_invalid_point() {
    let workspace = Workspace::new();
    let path = workspace.path("points.json");
    write_utf8(&path, br#"[{"name": "x", "lat": 95.0, "lon": 1.0}]"#);

    let err = load_points(&path).expect_err("invalid latitude should error");
    match err {
        CliError::InvalidPoint { index, source, .. } => {
            assert_eq!(index, 0);
            assert_eq!(source, PointSetError::InvalidLatitude(95.0));
        }
        other => panic!("expected InvalidPoint, found {other:?}"),
    }
}

#[rstest]
fn load_points_io_error_returns_open_error() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.json");

    let err = load_points(&path).expect_err("missing file should error");
    match err {
        CliError::OpenPoints { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenPoints, found {other:?}"),
    }
}
