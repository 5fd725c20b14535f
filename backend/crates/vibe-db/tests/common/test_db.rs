use vibe_core::UserIdentity;
use vibe_db::{UserRepository, run_migrations};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::fixtures::create_test_identity;

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

/// Inserts a user so child rows satisfy their foreign key
pub async fn create_test_user(pool: &SqlitePool, spotify_uri: &str) -> UserIdentity {
    let user = create_test_identity(spotify_uri);

    let inserted = UserRepository::insert_if_absent(pool, &user)
        .await
        .expect("Failed to insert test user");
    assert!(inserted, "test user URI already registered");

    user
}
