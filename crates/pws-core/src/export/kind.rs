//! Output kinds

use crate::error::{PwsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported output containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// OpenXML spreadsheet
    Xlsx,
    /// Comma separated values
    Csv,
}

impl ExportKind {
    pub const ALL: [ExportKind; 2] = [ExportKind::Xlsx, ExportKind::Csv];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Xlsx => "xlsx",
            ExportKind::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportKind::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportKind::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportKind {
    type Err = PwsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" => Ok(ExportKind::Xlsx),
            "csv" => Ok(ExportKind::Csv),
            other => Err(PwsError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(
            ExportKind::Xlsx.mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(ExportKind::Csv.mime_type(), "text/csv");
    }

    #[test]
    fn test_parse() {
        assert_eq!("XLSX".parse::<ExportKind>().unwrap(), ExportKind::Xlsx);
        assert_eq!(" csv ".parse::<ExportKind>().unwrap(), ExportKind::Csv);
        assert!(matches!(
            "ods".parse::<ExportKind>(),
            Err(PwsError::UnknownFormat(_))
        ));
    }
}
