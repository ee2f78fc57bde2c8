//! Exporter trait and manager

use super::artifact::ExportArtifact;
use super::csv::CsvExporter;
use super::kind::ExportKind;
use super::xlsx::XlsxExporter;
use crate::error::{PwsError, Result};
use crate::flatten::flatten;
use crate::response::RawResponse;
use crate::table::{build_table, Table};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, info};

/// Trait for table exporters
pub trait Exporter: Send + Sync {
    /// Serialize a table to an in-memory buffer
    fn serialize(&self, table: &Table) -> Result<Vec<u8>>;

    /// Output kind produced by this exporter
    fn kind(&self) -> ExportKind;

    /// Get the file extension
    fn file_extension(&self) -> &str {
        self.kind().extension()
    }

    /// MIME type of the serialized buffer
    fn mime_type(&self) -> &str {
        self.kind().mime_type()
    }
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<ExportKind, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        let mut manager = Self::empty();
        manager.register(Box::new(XlsxExporter::new()));
        manager.register(Box::new(CsvExporter::new()));
        manager
    }

    /// Create a manager without any exporters
    pub fn empty() -> Self {
        Self {
            exporters: HashMap::new(),
        }
    }

    /// Register an exporter, replacing any previous one of the same kind
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters.insert(exporter.kind(), exporter);
    }

    /// Get an exporter by kind
    pub fn get(&self, kind: ExportKind) -> Option<&dyn Exporter> {
        self.exporters.get(&kind).map(|e| e.as_ref())
    }

    /// Check if a kind is available
    pub fn has_kind(&self, kind: ExportKind) -> bool {
        self.exporters.contains_key(&kind)
    }

    /// Available kinds, sorted
    pub fn available_kinds(&self) -> Vec<ExportKind> {
        let mut kinds: Vec<_> = self.exporters.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Serialize a table with the exporter for `kind`
    pub fn export(&self, table: &Table, kind: ExportKind) -> Result<Vec<u8>> {
        let exporter = self
            .get(kind)
            .ok_or_else(|| PwsError::UnknownFormat(kind.to_string()))?;
        exporter.serialize(table)
    }

    /// Build the table for a captured response
    ///
    /// Recomputed on every call, nothing is cached between exports.
    pub fn table_for(&self, response: &RawResponse) -> Result<Table> {
        let records = response.records()?;
        let flat = flatten(&records)?;
        build_table(&flat)
    }

    /// Run the whole pipeline for a response, stamping the file name now
    pub fn export_response(&self, response: &RawResponse, kind: ExportKind) -> Result<ExportArtifact> {
        self.export_response_at(response, kind, Utc::now())
    }

    /// Run the whole pipeline with an explicit file name timestamp
    pub fn export_response_at(
        &self,
        response: &RawResponse,
        kind: ExportKind,
        timestamp: DateTime<Utc>,
    ) -> Result<ExportArtifact> {
        let table = self.table_for(response)?;
        debug!(
            "Built {}x{} table for {}",
            table.row_count(),
            table.width(),
            response.endpoint()
        );

        let bytes = self.export(&table, kind)?;
        let file_name = ExportArtifact::file_name_for(
            response.station_id(),
            response.endpoint().label(),
            timestamp,
            kind.extension(),
        );
        info!("Serialized {} ({} bytes)", file_name, bytes.len());

        Ok(ExportArtifact::new(bytes, kind.mime_type(), file_name))
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
