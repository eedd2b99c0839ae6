//! Test helpers for writing point files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Temporary directory addressed through a UTF-8 path.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// JSON for the corners of a one-degree square, listed so that the input
/// order crosses itself.
pub(super) const CROSSED_SQUARE_JSON: &str = r#"[
    { "name": "A", "lat": 0.0, "lon": 0.0 },
    { "name": "C", "lat": 1.0, "lon": 1.0 },
    { "name": "B", "lat": 1.0, "lon": 0.0 },
    { "name": "D", "lat": 0.0, "lon": 1.0 }
]"#;
