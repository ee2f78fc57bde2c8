//! Download capability
//!
//! The export engine never touches a browser or a filesystem directly; it
//! hands finished artifacts to a [`DownloadTarget`].

use super::artifact::ExportArtifact;
use crate::error::{PwsError, Result};
use std::sync::Mutex;

/// Something that can deliver a serialized export to the user
pub trait DownloadTarget {
    /// Deliver `bytes` under `file_name`
    fn trigger_download(&self, bytes: &[u8], mime_type: &str, file_name: &str) -> Result<()>;

    /// Deliver a whole artifact
    fn deliver(&self, artifact: &ExportArtifact) -> Result<()> {
        self.trigger_download(&artifact.bytes, artifact.mime_type, &artifact.file_name)
    }
}

/// Download target that keeps every delivered file in memory
#[derive(Debug, Default)]
pub struct MemoryDownloads {
    delivered: Mutex<Vec<(String, String, Vec<u8>)>>,
}

impl MemoryDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivered files as `(file_name, mime_type, bytes)`, in delivery order
    pub fn delivered(&self) -> Vec<(String, String, Vec<u8>)> {
        self.delivered
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.delivered.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DownloadTarget for MemoryDownloads {
    fn trigger_download(&self, bytes: &[u8], mime_type: &str, file_name: &str) -> Result<()> {
        let mut delivered = self
            .delivered
            .lock()
            .map_err(|_| PwsError::Download("download list poisoned".to_string()))?;
        delivered.push((file_name.to_string(), mime_type.to_string(), bytes.to_vec()));
        Ok(())
    }
}
