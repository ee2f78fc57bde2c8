//! CSV exporter

use super::exporter::Exporter;
use super::kind::ExportKind;
use crate::error::{PwsError, Result};
use crate::table::Table;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};

/// CSV exporter with RFC 4180 quoting
///
/// Fields containing the delimiter, a quote or a line break are quoted and
/// embedded quotes are doubled. Records end with CRLF.
pub struct CsvExporter {
    delimiter: u8,
}

impl CsvExporter {
    /// Create a comma separated exporter
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use a different single-byte delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for CsvExporter {
    fn serialize(&self, table: &Table) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(Vec::new());

        for record in table.to_text_rows() {
            writer.write_record(&record)?;
        }

        writer
            .into_inner()
            .map_err(|e| PwsError::Serialization(e.to_string()))
    }

    fn kind(&self) -> ExportKind {
        ExportKind::Csv
    }
}
