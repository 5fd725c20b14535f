use crate::tests::{TEST_SECRET, create_test_state};
use crate::{ApiError, AuthenticatedUser};

use vibe_auth::SessionTokenService;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

#[tokio::test]
async fn test_extractor_with_valid_session_token() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let token = state.session_tokens.issue(user_id).unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (mut parts, _body) = request.into_parts();

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0, user_id);
}

#[tokio::test]
async fn test_extractor_with_token_signed_by_other_secret() {
    let state = create_test_state().await;
    let foreign = SessionTokenService::with_hs256(b"another-secret-that-is-32-bytes!", 3600);
    let token = foreign.issue(Uuid::new_v4()).unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (mut parts, _body) = request.into_parts();

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_expired_session_token() {
    let state = create_test_state().await;
    let short_lived = SessionTokenService::with_hs256(TEST_SECRET, 60);
    let issued = chrono::Utc::now() - chrono::Duration::hours(2);
    let token = short_lived.issue_at(Uuid::new_v4(), issued).unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (mut parts, _body) = request.into_parts();

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => {
            assert_eq!(message, "Session token expired")
        }
        _ => panic!("Expected Unauthorized"),
    }
}
