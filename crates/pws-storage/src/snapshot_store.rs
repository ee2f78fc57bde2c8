//! File system storage for captured responses

use pws_core::error::{PwsError, Result};
use pws_core::RawResponse;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory of saved [`RawResponse`] snapshots
pub struct SnapshotStore {
    snapshots_dir: PathBuf,
}

impl SnapshotStore {
    /// Create a store below `base_dir/snapshots`
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let snapshots_dir = base_dir.into().join("snapshots");
        if !snapshots_dir.exists() {
            fs::create_dir_all(&snapshots_dir).map_err(|e| {
                PwsError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create snapshots directory: {}", e),
                ))
            })?;
            debug!("Created snapshots directory: {:?}", snapshots_dir);
        }
        Ok(Self { snapshots_dir })
    }

    /// Store with the default data directory
    pub fn default_location() -> Result<Self> {
        Self::new(crate::default_data_dir())
    }

    pub fn snapshots_dir(&self) -> &Path {
        &self.snapshots_dir
    }

    /// Path a response is saved under
    pub fn snapshot_path(&self, response: &RawResponse) -> PathBuf {
        self.snapshots_dir.join(format!(
            "{}-{}-{}.json",
            response.station_id().replace(['/', '\\'], "_"),
            response.endpoint().name(),
            response.captured().format("%Y%m%dT%H%M%S%3fZ")
        ))
    }

    /// Save a response into the store
    pub fn save(&self, response: &RawResponse) -> Result<PathBuf> {
        let path = self.snapshot_path(response);
        Self::write_to(&path, response)?;
        Ok(path)
    }

    /// Write a response to an arbitrary path (write to temp, then rename)
    pub fn write_to(path: &Path, response: &RawResponse) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = path.with_extension("json.tmp");
        {
            let file = fs::File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, response)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            PwsError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved snapshot to {:?}", path);
        Ok(())
    }

    /// Read a snapshot file
    pub fn read_from(path: &Path) -> Result<RawResponse> {
        let file = fs::File::open(path)
            .map_err(|e| PwsError::Io(e).with_context(format!("Cannot open {}", path.display())))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Snapshot files in the store, skipping temp and foreign files
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.snapshots_dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Most recently captured snapshot
    pub fn latest(&self) -> Result<Option<RawResponse>> {
        let mut latest: Option<RawResponse> = None;
        for path in self.list()? {
            match Self::read_from(&path) {
                Ok(response) => {
                    if latest
                        .as_ref()
                        .map(|l| response.captured() > l.captured())
                        .unwrap_or(true)
                    {
                        latest = Some(response);
                    }
                }
                Err(e) => warn!("Failed to read snapshot {:?}: {}", path, e),
            }
        }
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use pws_core::Endpoint;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_store() -> (SnapshotStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path()).unwrap();
        (store, temp_dir)
    }

    fn response_at(offset_secs: i64) -> RawResponse {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        RawResponse::captured_at(
            Endpoint::Current,
            "KMAHANOV10",
            json!({"observations": [{"epoch": offset_secs}]}),
            base + Duration::seconds(offset_secs),
        )
    }

    #[test]
    fn test_store_creation() {
        let (store, _temp) = create_test_store();
        assert!(store.snapshots_dir().exists());
    }

    #[test]
    fn test_snapshot_path() {
        let (store, _temp) = create_test_store();
        let path = store.snapshot_path(&response_at(0));
        assert!(path.ends_with("KMAHANOV10-current-20240501T120000000Z.json"));
    }

    #[test]
    fn test_save_and_read() {
        let (store, _temp) = create_test_store();
        let response = response_at(0);
        let path = store.save(&response).unwrap();
        assert_eq!(SnapshotStore::read_from(&path).unwrap(), response);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_read_missing_file() {
        let (store, _temp) = create_test_store();
        let result = SnapshotStore::read_from(&store.snapshots_dir().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_latest() {
        let (store, _temp) = create_test_store();
        assert!(store.latest().unwrap().is_none());

        store.save(&response_at(60)).unwrap();
        store.save(&response_at(0)).unwrap();
        let latest = store.latest().unwrap().unwrap();
        assert_eq!(latest, response_at(60));
    }

    #[test]
    fn test_ignores_temp_and_other_files() {
        let (store, _temp) = create_test_store();
        fs::write(store.snapshots_dir().join("x.json.tmp"), "{}").unwrap();
        fs::write(store.snapshots_dir().join("readme.txt"), "test").unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
