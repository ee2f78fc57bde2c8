//! Blocking HTTP client for the PWS API

use crate::error::{ClientError, Result};
use crate::params::{request_url, ValidParams};
use pws_core::RawResponse;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// PWS API client
pub struct PwsClient {
    http: Client,
    base_url: String,
}

impl PwsClient {
    /// Create a client for `base_url` with a request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pws-export/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch and capture a response
    pub fn fetch(&self, params: &ValidParams) -> Result<RawResponse> {
        let url = request_url(&self.base_url, params)?;
        debug!(
            "GET {}{} for station {}",
            self.base_url,
            params.endpoint.path(),
            params.station_id
        );

        let response = self.http.get(url).send()?;
        check_status(response.status())?;

        let payload: Value = response.json()?;
        info!("Fetched {} for {}", params.endpoint, params.station_id);

        Ok(RawResponse::new(params.endpoint, params.station_id.clone(), payload))
    }
}

/// Map a response status to the fetch outcome
///
/// 204 means the station has no data for the endpoint; any other non-2xx
/// status is an HTTP failure.
fn check_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::NO_CONTENT {
        return Err(ClientError::NoContent);
    }
    if !status.is_success() {
        return Err(ClientError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Request failed").to_string(),
        });
    }
    Ok(())
}
