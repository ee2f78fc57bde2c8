//! In-memory export artifacts

use chrono::{DateTime, SecondsFormat, Utc};

/// Serialized export ready to be handed to a download target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Serialized file content
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`
    pub mime_type: &'static str,
    /// Suggested file name
    pub file_name: String,
}

impl ExportArtifact {
    pub fn new(bytes: Vec<u8>, mime_type: &'static str, file_name: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type,
            file_name: file_name.into(),
        }
    }

    /// `"{station} {label} {timestamp}.{ext}"` with an ISO-8601 UTC timestamp
    /// at millisecond precision
    pub fn file_name_for(
        station_id: &str,
        endpoint_label: &str,
        timestamp: DateTime<Utc>,
        extension: &str,
    ) -> String {
        format!(
            "{} {} {}.{}",
            station_id,
            endpoint_label,
            timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_name_pattern() {
        let ts = Utc.with_ymd_and_hms(2023, 11, 5, 7, 4, 9).unwrap();
        assert_eq!(
            ExportArtifact::file_name_for("IBERLIN123", "7 Day History", ts, "xlsx"),
            "IBERLIN123 7 Day History 2023-11-05T07:04:09.000Z.xlsx"
        );
    }

    #[test]
    fn test_file_name_keeps_millis() {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let name = ExportArtifact::file_name_for("S", "Current Conditions", ts, "csv");
        assert!(name.ends_with(".123Z.csv"));
    }
}
