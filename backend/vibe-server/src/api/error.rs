//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a matching HTTP status.

use vibe_auth::AuthError;
use vibe_profile::ProfileError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Request field a validation error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 502
    #[error("Upstream auth failure: {message} {location}")]
    UpstreamAuthFailure {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } | ApiError::UpstreamAuthFailure { .. } => {
                log::error!("{}", self)
            }
            _ => log::warn!("{}", self),
        }

        let (status, code, message, field) = match self {
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message, None)
            }
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::UpstreamAuthFailure { message, .. } => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_AUTH_FAILURE",
                message,
                None,
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorBody {
            code: code.to_string(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<ProfileError> for ApiError {
    #[track_caller]
    fn from(e: ProfileError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ProfileError::NotFound { message, .. } => ApiError::NotFound { message, location },
            ProfileError::InvalidArgument { field, message, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            ProfileError::UpstreamAuthFailure { source, .. } => {
                log::error!("Music provider call failed: {}", source);
                ApiError::UpstreamAuthFailure {
                    message: "Music provider rejected the request".to_string(),
                    location,
                }
            }
            ProfileError::Storage {
                operation, source, ..
            } => {
                // Storage details stay in the log
                log::error!("Storage failure during {}: {}", operation, source);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        log::debug!("Session credential rejected: {}", e);

        if e.is_server_fault() {
            ApiError::Internal {
                message: e.client_message().to_string(),
                location,
            }
        } else {
            ApiError::Unauthorized {
                message: e.client_message().to_string(),
                location,
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
