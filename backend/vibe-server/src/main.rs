use vibe_auth::SessionTokenService;
use vibe_config::Config;
use vibe_provider::{DelegatedProvider, SpotifyClient, SpotifyClientConfig};
use vibe_server::error::ServerError;
use vibe_server::{AppState, build_router, logger};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Local development keeps secrets in .env
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)
                .map_err(|e| ServerError::log_file(log_dir.clone(), e))?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Before any other logging
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting vibe-server v{}", env!("CARGO_PKG_VERSION"));
    if !dotenv_loaded {
        warn!("No .env file found, using config.toml and environment only");
    }
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = vibe_db::create_pool(
        &database_path,
        config.database.max_connections,
        config.database.busy_timeout(),
    )
    .await?;
    vibe_db::run_migrations(&pool).await?;
    info!("Database ready");

    let jwt_secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| vibe_config::ConfigError::auth("auth.jwt_secret is required"))?;
    let session_tokens =
        SessionTokenService::with_hs256(jwt_secret.as_bytes(), config.auth.session_ttl_secs);

    let provider: Arc<dyn DelegatedProvider> = Arc::new(SpotifyClient::new(SpotifyClientConfig {
        client_id: config.provider.client_id.clone(),
        client_secret: config.provider.client_secret.clone(),
        accounts_url: config.provider.accounts_url.clone(),
        api_url: config.provider.api_url.clone(),
        timeout: config.provider.timeout(),
    })?);

    let app = build_router(AppState::new(pool.clone(), session_tokens, provider));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Port 0 is resolved by the OS
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal source, run until killed
            std::future::pending::<()>().await
        }
    }
}
