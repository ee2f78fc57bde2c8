//! Client error types

use crate::params::ValidationError;
use pws_core::state::StatusMessage;
use thiserror::Error;

/// Errors raised while fetching a response
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required form field is missing
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Base URL or endpoint path could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API answered with a non-success status
    #[error("{status} - {reason}")]
    Http { status: u16, reason: String },

    /// The API had no data for the request
    #[error("No data available for this station and endpoint")]
    NoContent,

    /// Transport or decoding failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    /// Message shown to the user for this error
    pub fn status_message(&self) -> StatusMessage {
        match self {
            ClientError::Validation(e) => StatusMessage::info(e.to_string()),
            ClientError::NoContent => StatusMessage::info(self.to_string()),
            ClientError::Http { .. } => StatusMessage::danger(format!(
                "{}. Please check the parameter values are correct.",
                self
            )),
            ClientError::InvalidUrl(_) | ClientError::Request(_) => {
                StatusMessage::danger("An error occurred while fetching data")
            }
        }
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, ClientError>;
