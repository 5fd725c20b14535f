use vibe_core::{DelegatedTokens, UserIdentity};
use vibe_db::{UserRepository, create_pool, run_migrations};

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// WAL database file inside `dir` with several connections, as the server opens it
pub async fn create_file_pool(dir: &TempDir) -> SqlitePool {
    let pool = create_pool(&dir.path().join("vibe.db"), 4, Duration::from_secs(5))
        .await
        .expect("Failed to create file pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Current time truncated to whole seconds, the precision the store keeps
pub fn now_secs() -> DateTime<Utc> {
    DateTime::from_timestamp(Utc::now().timestamp(), 0).expect("valid timestamp")
}

/// Registers a user whose delegated access token expires at `expires_at`
pub async fn create_user_with_expiry(
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
        .expect("Failed to insert test user");

    user
}

/// Registers a user with a token valid for another hour
pub async fn create_test_user(pool: &SqlitePool, spotify_uri: &str) -> UserIdentity {
    create_user_with_expiry(pool, spotify_uri, now_secs() + chrono::Duration::hours(1)).await
}

pub async fn load_user(pool: &SqlitePool, user: &UserIdentity) -> UserIdentity {
    UserRepository::find_by_id(pool, user.id)
        .await
        .expect("Failed to load user")
        .expect("user exists")
}
