use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid gender: {value} {location}")]
    InvalidGender {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid dating preference: {value} {location}")]
    InvalidDatingPreference {
        value: String,
        location: ErrorLocation,
    },

    #[error("Failed to encode {column}: {source} {location}")]
    BlobEncode {
        column: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to decode {column}: {source} {location}")]
    BlobDecode {
        column: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the request field an error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidGender { .. } => Some("gender"),
            Self::InvalidDatingPreference { .. } => Some("dating_preference"),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
