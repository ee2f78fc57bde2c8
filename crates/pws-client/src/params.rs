//! Fetch form parameters and request URLs

use pws_core::{Endpoint, NumericPrecision, Unit};
use thiserror::Error;
use url::Url;

/// Missing form fields, reported in the order the form is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please specify endpoint")]
    MissingEndpoint,
    #[error("Please specify API Key")]
    MissingApiKey,
    #[error("Please specify Station ID")]
    MissingStationId,
    #[error("Please specify Unit")]
    MissingUnit,
}

/// Fetch form as entered, possibly incomplete
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    pub endpoint: Option<Endpoint>,
    pub api_key: String,
    pub station_id: String,
    pub unit: Option<Unit>,
    pub numeric_precision: NumericPrecision,
}

impl FetchParams {
    /// Check required fields: endpoint, API key, station id, then unit
    pub fn validate(self) -> Result<ValidParams, ValidationError> {
        let endpoint = self.endpoint.ok_or(ValidationError::MissingEndpoint)?;
        let api_key = non_blank(self.api_key).ok_or(ValidationError::MissingApiKey)?;
        let station_id = non_blank(self.station_id).ok_or(ValidationError::MissingStationId)?;
        let unit = self.unit.ok_or(ValidationError::MissingUnit)?;

        Ok(ValidParams {
            endpoint,
            api_key,
            station_id,
            unit,
            numeric_precision: self.numeric_precision,
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Complete fetch parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidParams {
    pub endpoint: Endpoint,
    pub api_key: String,
    pub station_id: String,
    pub unit: Unit,
    pub numeric_precision: NumericPrecision,
}

/// Request URL for `params` below `base_url`
pub fn request_url(base_url: &str, params: &ValidParams) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base.join(params.endpoint.path())?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("apiKey", &params.api_key)
            .append_pair("format", "json")
            .append_pair("units", params.unit.code())
            .append_pair("stationId", &params.station_id);
        if let Some(precision) = params.numeric_precision.query_value() {
            query.append_pair("numericPrecision", precision);
        }
    }
    Ok(url)
}
