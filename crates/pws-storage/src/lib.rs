//! pws-storage - Storage library for pws-export
//!
//! This crate provides filesystem implementations for downloads, saved
//! preferences and response snapshots.

mod downloads;
mod preferences;
mod snapshot_store;

pub use downloads::FileSystemDownloads;
pub use preferences::{PreferenceStore, Preferences};
pub use snapshot_store::SnapshotStore;

use std::path::PathBuf;

/// Default data directory (platform data dir, or ~/.pws-export)
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "pws-export", "pws-export")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".pws-export")
        })
}
