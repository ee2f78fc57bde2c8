//! File system download target

use pws_core::error::{PwsError, Result};
use pws_core::export::DownloadTarget;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Download target that saves files into a directory
pub struct FileSystemDownloads {
    output_dir: PathBuf,
}

impl FileSystemDownloads {
    /// Create a target writing into `output_dir`, creating it if needed
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        if !output_dir.exists() {
            fs::create_dir_all(&output_dir).map_err(|e| {
                PwsError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create output directory: {}", e),
                ))
            })?;
            debug!("Created output directory: {:?}", output_dir);
        }
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Final path for a suggested file name
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(local_file_name(file_name))
    }
}

/// Windows rejects ':' in file names, which ISO-8601 timestamps contain
fn local_file_name(file_name: &str) -> String {
    let name = file_name.replace(['/', '\\'], "_");
    if cfg!(windows) {
        name.replace(':', "-")
    } else {
        name
    }
}

impl DownloadTarget for FileSystemDownloads {
    fn trigger_download(&self, bytes: &[u8], mime_type: &str, file_name: &str) -> Result<()> {
        let final_path = self.path_for(file_name);
        let temp_path = self
            .output_dir
            .join(format!(".{}.tmp", local_file_name(file_name)));

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(bytes)?;
            file.flush()?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            PwsError::Download(format!("Failed to write {}: {}", final_path.display(), e))
        })?;

        debug!("Saved {} ({}) to {:?}", file_name, mime_type, final_path);
        Ok(())
    }
}
