//! Error types for pws-export

use crate::export::ExportKind;
use thiserror::Error;

/// Main error type for pws-export
#[derive(Debug, Error)]
pub enum PwsError {
    /// No records to build a table from
    #[error("No records to export")]
    EmptyInput,

    /// The first record has no leaf fields to take column headers from
    #[error("First record has no fields to use as column headers")]
    NoHeaders,

    /// The endpoint's record list field is absent or not an array
    #[error("Response has no '{field}' record list")]
    MissingRecordList { field: String },

    /// The spreadsheet or CSV encoder rejected the table
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// An export of this format is already running
    #[error("The {0} export is already in progress")]
    ExportInProgress(ExportKind),

    /// Unknown export format name
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Unknown endpoint name or path
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// Unknown unit code
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Download target could not deliver the artifact
    #[error("Download failed: {0}")]
    Download(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<PwsError>,
    },
}

impl PwsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        PwsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for PwsError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        PwsError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for PwsError {
    fn from(err: csv::Error) -> Self {
        PwsError::Serialization(err.to_string())
    }
}

/// Result type alias for pws-export
pub type Result<T> = std::result::Result<T, PwsError>;
