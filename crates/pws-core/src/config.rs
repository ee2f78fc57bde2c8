//! Configuration management for pws-export

use crate::endpoint::NumericPrecision;
use crate::error::{PwsError, Result};
use crate::export::{CsvExporter, ExportKind, ExportManager, XlsxExporter, DEFAULT_HEADER_FILL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API settings
    pub api: ApiConfig,
    /// Export settings
    pub export: ExportConfig,
}

impl Config {
    /// Exporters configured from the `[export]` section
    pub fn export_manager(&self) -> Result<ExportManager> {
        let mut manager = ExportManager::empty();
        manager.register(Box::new(
            XlsxExporter::new().with_header_fill(self.export.header_fill_rgb()?),
        ));
        manager.register(Box::new(
            CsvExporter::new().with_delimiter(self.export.csv_delimiter_byte()?),
        ));
        Ok(manager)
    }
}

/// API-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Default numeric precision
    pub numeric_precision: NumericPrecision,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weather.com/v2/pws/".to_string(),
            timeout_secs: 30,
            numeric_precision: NumericPrecision::Decimal,
        }
    }
}

/// Export-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Formats written when none are given on the command line
    pub formats: Vec<ExportKind>,
    /// Directory downloads are written to
    pub output_dir: PathBuf,
    /// Single-character CSV delimiter
    pub csv_delimiter: String,
    /// Header fill as `RRGGBB` hex
    pub header_fill: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            formats: vec![ExportKind::Xlsx, ExportKind::Csv],
            output_dir: PathBuf::from("."),
            csv_delimiter: ",".to_string(),
            header_fill: format!("{:06X}", DEFAULT_HEADER_FILL),
        }
    }
}

impl ExportConfig {
    pub fn csv_delimiter_byte(&self) -> Result<u8> {
        match self.csv_delimiter.as_bytes() {
            [b] if b.is_ascii() && !matches!(*b, b'"' | b'\r' | b'\n') => Ok(*b),
            _ => Err(PwsError::Config(format!(
                "csv_delimiter must be a single ASCII character other than a quote or line break, got {:?}",
                self.csv_delimiter
            ))),
        }
    }

    pub fn header_fill_rgb(&self) -> Result<u32> {
        let hex = self.header_fill.trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PwsError::Config(format!(
                "header_fill must be RRGGBB, got {:?}",
                self.header_fill
            )));
        }
        u32::from_str_radix(hex, 16).map_err(|e| {
            PwsError::Config(format!("header_fill {:?}: {}", self.header_fill, e))
        })
    }
}
