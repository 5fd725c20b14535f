use crate::ApiError;

use vibe_auth::AuthError;
use vibe_db::DbError;
use vibe_profile::ProfileError;
use vibe_provider::ProviderError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid gender".into(),
        field: Some("gender".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "gender");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Invalid session token".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_upstream_failure_returns_502() {
    let error = ApiError::UpstreamAuthFailure {
        message: "Music provider rejected the request".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_AUTH_FAILURE");
}

#[tokio::test]
async fn test_storage_failure_hides_database_details() {
    let profile_error = ProfileError::Storage {
        operation: "load user",
        source: DbError::Initialization {
            message: "disk I/O error in /var/lib/vibe.db".into(),
            location: ErrorLocation::from(Location::caller()),
        },
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(profile_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[test]
fn test_invalid_argument_converts_to_validation_with_field() {
    let error = ApiError::from(ProfileError::invalid_argument(
        "spotify_uri",
        "spotify_uri is required",
    ));

    match error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("spotify_uri"));
            assert_eq!(message, "spotify_uri is required");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_provider_failure_converts_to_upstream() {
    let error = ApiError::from(ProfileError::upstream(ProviderError::Configuration {
        message: "bad client".into(),
        location: ErrorLocation::from(Location::caller()),
    }));

    assert!(matches!(error, ApiError::UpstreamAuthFailure { .. }));
}

#[test]
fn test_expired_session_converts_to_unauthorized() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    match error {
        ApiError::Unauthorized { message, .. } => assert_eq!(message, "Session token expired"),
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
}
