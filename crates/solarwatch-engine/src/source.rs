//! Snapshot intake from the telemetry collaborator.
//!
//! The collaborator publishes a JSON [`Snapshot`] to a file each cycle.
//! A [`SnapshotSource`] never fails: when the file is missing or
//! malformed, [`FileSnapshotSource`] serves demo data flagged `is_demo`
//! so the analysis still runs.

use std::path::{Path, PathBuf};

use solarwatch_types::Snapshot;
use tracing::{debug, warn};

use crate::demo::DemoSnapshotSource;

/// Errors reading a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        /// The snapshot file.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a valid snapshot document.
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        /// The snapshot file.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Supplies one snapshot per analysis cycle.
pub trait SnapshotSource {
    /// Fetch the current snapshot. Degraded data is flagged `is_demo`
    /// rather than reported as an error.
    fn fetch(&mut self) -> Snapshot;
}

/// Read and normalize a snapshot file.
///
/// Series are stable-sorted by time and flare classes are re-derived from
/// flux.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut snapshot: Snapshot =
        serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    if !snapshot.is_time_ordered() {
        debug!(path = %path.display(), "Snapshot series out of order, sorting");
        snapshot.sort_by_time();
    }
    snapshot.derive_flare_classes();
    Ok(snapshot)
}

/// Reads the collaborator's snapshot file, falling back to demo data.
pub struct FileSnapshotSource {
    path: PathBuf,
    fallback: DemoSnapshotSource,
}

impl FileSnapshotSource {
    /// Read from `path`, serving `fallback` data when it is unusable.
    pub const fn new(path: PathBuf, fallback: DemoSnapshotSource) -> Self {
        Self { path, fallback }
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn fetch(&mut self) -> Snapshot {
        match read_snapshot(&self.path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Snapshot unavailable, serving demo data");
                self.fallback.fetch()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scratch_file(tag: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "solarwatch_snapshot_{tag}_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_and_normalizes() {
        let path = scratch_file(
            "normalize",
            r#"{
                "kp": [
                    {"time": "2024-05-10T03:00:00Z", "kp": 4.0},
                    {"time": "2024-05-10T00:00:00Z", "kp": 2.0}
                ],
                "flares": [{"time": "2024-05-10T00:00:00Z", "flux": 6.2e-5, "class": "bogus"}]
            }"#,
        );
        let snapshot = read_snapshot(&path).unwrap();
        assert!(snapshot.is_time_ordered());
        assert_eq!(snapshot.flares.first().unwrap().class, "M6.2");
        assert!(!snapshot.is_demo);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = scratch_file("malformed", "{ not json");
        assert!(matches!(read_snapshot(&path), Err(SourceError::Parse { .. })));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_falls_back_to_demo() {
        let mut source = FileSnapshotSource::new(
            PathBuf::from("/nonexistent/solarwatch/snapshot.json"),
            DemoSnapshotSource::new(Some(1)),
        );
        let snapshot = source.fetch();
        assert!(snapshot.is_demo);
        assert!(!snapshot.kp.is_empty());
    }
}
