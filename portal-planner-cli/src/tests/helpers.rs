//! Test helpers for writing plan requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Corridor running 0.004 degrees east along the equator.
pub(super) const CORRIDOR_REQUEST: &str = r#"{
  "corridor": [{ "x": 0.0, "y": 0.0 }, { "x": 0.004, "y": 0.0 }],
  "waypoints": [
    { "id": "statue", "location": { "x": 0.0035, "y": 0.0 }, "level": 2, "energy": 0, "resonators": 0 },
    { "id": "fountain", "location": { "x": 0.0005, "y": 0.0001 }, "level": 5, "energy": 100, "resonators": 8, "captured": true },
    { "id": "mural", "location": { "x": 0.002, "y": -0.0002 }, "level": 3, "energy": 40, "resonators": 4 },
    { "id": "lighthouse", "location": { "x": 0.002, "y": 0.01 }, "level": 8, "energy": 100, "resonators": 8 }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write test file");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}
