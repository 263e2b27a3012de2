#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// Invoice JSON matching the end-to-end example: one invoice, two items.
pub const SAMPLE_INVOICES: &str = r#"[
  {
    "id": "A1",
    "created_on": "2024-01-01",
    "items": [
      {"item": {"id": "I1", "name": "Widget", "unit_price": "10", "type": 0}, "quantity": "2"},
      {"item": {"id": "I2", "name": "Gadget", "unit_price": "30", "type": 1}, "quantity": "1"}
    ]
  }
]"#;
