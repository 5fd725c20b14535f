use vibe_core::CoreError;
use vibe_db::DbError;
use vibe_provider::ProviderError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        field: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Upstream auth failure: {source} {location}")]
    UpstreamAuthFailure {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Storage failure during {operation}: {source} {location}")]
    Storage {
        operation: &'static str,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl ProfileError {
    #[track_caller]
    pub fn user_not_found(user_id: Uuid) -> Self {
        Self::NotFound {
            message: format!("User {} not found", user_id),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: Some(field.to_string()),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream(source: ProviderError) -> Self {
        Self::UpstreamAuthFailure {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ProfileError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let message = match &err {
            CoreError::InvalidGender { value, .. } => {
                format!("Invalid gender '{}': expected Man, Woman or Non-binary", value)
            }
            CoreError::InvalidDatingPreference { value, .. } => format!(
                "Invalid dating preference '{}': expected Men, Women or Everyone",
                value
            ),
            CoreError::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        };

        Self::InvalidArgument {
            field: err.field().map(String::from),
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Attach the failing operation to a storage error
pub(crate) trait StorageContext<T> {
    fn storage(self, operation: &'static str) -> Result<T>;
}

impl<T, E> StorageContext<T> for std::result::Result<T, E>
where
    E: Into<DbError>,
{
    #[track_caller]
    fn storage(self, operation: &'static str) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(ProfileError::Storage {
                operation,
                source: err.into(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
