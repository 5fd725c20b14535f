use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors talking to the music provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request error during {operation}: {source} {location}")]
    Http {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Provider {operation} failed with status {status} {location}")]
    Status {
        operation: &'static str,
        status: u16,
        location: ErrorLocation,
    },

    #[error("Provider {operation} returned an unusable response: {message} {location}")]
    InvalidResponse {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider client configuration error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl ProviderError {
    #[track_caller]
    pub fn http(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Http {
            operation,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status(operation: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Status {
            operation,
            status: status.as_u16(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
