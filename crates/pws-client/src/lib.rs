//! pws-client - PWS API client for pws-export
//!
//! This crate validates the fetch form, builds request URLs and fetches
//! responses from the personal-weather-station API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pws_client::{FetchParams, PwsClient};
//!
//! let params = FetchParams { /* ... */ }.validate()?;
//! let client = PwsClient::new("https://api.weather.com/v2/pws/", Duration::from_secs(30))?;
//! let response = client.fetch(&params)?;
//! ```

pub mod client;
pub mod error;
pub mod params;

pub use client::PwsClient;
pub use error::{ClientError, Result};
pub use params::{request_url, FetchParams, ValidParams, ValidationError};
