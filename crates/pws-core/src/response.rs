//! Captured API responses

use crate::endpoint::Endpoint;
use crate::error::{PwsError, Result};
use crate::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Immutable snapshot of one API response
///
/// Produced by a fetch and read by any number of exports until the next
/// fetch replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    endpoint: Endpoint,
    station_id: String,
    captured_at: DateTime<Utc>,
    payload: Value,
}

impl RawResponse {
    /// Capture a response now
    pub fn new(endpoint: Endpoint, station_id: impl Into<String>, payload: Value) -> Self {
        Self::captured_at(endpoint, station_id, payload, Utc::now())
    }

    /// Capture a response with an explicit timestamp
    pub fn captured_at(
        endpoint: Endpoint,
        station_id: impl Into<String>,
        payload: Value,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            endpoint,
            station_id: station_id.into(),
            captured_at,
            payload,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn captured(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Records held by the endpoint's record list field
    pub fn records(&self) -> Result<Vec<Record>> {
        let field = self.endpoint.record_field();
        let list = self
            .payload
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| PwsError::MissingRecordList {
                field: field.to_string(),
            })?;

        Ok(list.iter().cloned().map(Record::from).collect())
    }

    /// Payload as indented JSON for display
    pub fn pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.payload)?)
    }
}
