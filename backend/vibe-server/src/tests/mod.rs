mod api;

use crate::AppState;

use vibe_auth::SessionTokenService;
use vibe_provider::{SpotifyClient, SpotifyClientConfig};

use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

pub(crate) const TEST_SECRET: &[u8] = b"unit-test-secret-with-32-bytes!!";

/// State whose provider is never reached by the code under test
pub(crate) async fn create_test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool");

    let provider = SpotifyClient::new(SpotifyClientConfig {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        accounts_url: "http://127.0.0.1:9".to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(1),
    })
    .expect("Failed to build provider client");

    AppState::new(
        pool,
        SessionTokenService::with_hs256(TEST_SECRET, 3600),
        Arc::new(provider),
    )
}
