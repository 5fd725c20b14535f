#![allow(dead_code)]

//! Test infrastructure for vibe-server API tests

use vibe_auth::SessionTokenService;
use vibe_core::{DelegatedTokens, UserIdentity};
use vibe_db::{UserRepository, run_migrations};
use vibe_provider::{SpotifyClient, SpotifyClientConfig};
use vibe_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::MockServer;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes";

/// Router plus the pieces tests poke at directly
pub struct TestApp {
    pub state: AppState,
    pub provider: MockServer,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }

    pub fn bearer_for(&self, user_id: Uuid) -> String {
        let token = self
            .state
            .session_tokens
            .issue(user_id)
            .expect("Failed to issue session token");
        format!("Bearer {}", token)
    }

    /// Send `request` and decode the JSON body (`Null` when empty)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).expect("Response body is not JSON")
        };

        (status, json)
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// App whose provider client talks to a fresh wiremock server
pub async fn create_test_app() -> TestApp {
    let provider = MockServer::start().await;
    let pool = create_test_pool().await;

    let client = SpotifyClient::new(SpotifyClientConfig {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        accounts_url: provider.uri(),
        api_url: provider.uri(),
        timeout: Duration::from_secs(5),
    })
    .expect("Failed to build provider client");

    let state = AppState::new(
        pool,
        SessionTokenService::with_hs256(TEST_SECRET, 3600),
        Arc::new(client),
    );

    TestApp { state, provider }
}

/// Current time truncated to whole seconds
pub fn now_secs() -> DateTime<Utc> {
    DateTime::from_timestamp(Utc::now().timestamp(), 0).expect("valid timestamp")
}

/// Register a user whose delegated access token expires at `expires_at`
pub async fn create_test_user(
    pool: &SqlitePool,
    spotify_uri: &str,
    expires_at: DateTime<Utc>,
) -> UserIdentity {
    let tokens = DelegatedTokens::new(
        "stored-access".to_string(),
        "stored-refresh".to_string(),
        expires_at,
    );
    let user = UserIdentity::new(spotify_uri.to_string(), tokens);

    UserRepository::insert_if_absent(pool, &user)
        .await
        .expect("Failed to create test user");

    user
}

pub async fn load_user(pool: &SqlitePool, user_id: Uuid) -> UserIdentity {
    UserRepository::find_by_id(pool, user_id)
        .await
        .expect("Failed to load user")
        .expect("User missing")
}

pub fn json_request(
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("Authorization", auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn raw_request(
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: &'static str,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("Authorization", auth);
    }
    builder.body(Body::from(body)).unwrap()
}
