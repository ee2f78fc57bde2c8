//! Tabular export of flattened responses
//!
//! This module serializes tables to spreadsheet formats and hands the
//! resulting artifacts to a download target.
//!
//! # Overview
//!
//! Export supports:
//! - XLSX (single `Data` worksheet, styled header row)
//! - CSV (RFC 4180 quoting, no styling)
//!
//! # Example
//!
//! ```ignore
//! use pws_core::export::{ExportKind, ExportManager};
//!
//! let manager = ExportManager::new();
//! let artifact = manager.export_response(&response, ExportKind::Xlsx)?;
//! target.trigger_download(&artifact.bytes, artifact.mime_type, &artifact.file_name)?;
//! ```

mod artifact;
mod csv;
mod download;
mod exporter;
mod kind;
mod xlsx;

pub use artifact::ExportArtifact;
pub use self::csv::CsvExporter;
pub use download::{DownloadTarget, MemoryDownloads};
pub use exporter::{ExportManager, Exporter};
pub use kind::ExportKind;
pub use xlsx::{XlsxExporter, DEFAULT_HEADER_FILL, SHEET_NAME};
