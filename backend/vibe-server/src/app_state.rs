use vibe_auth::SessionTokenService;
use vibe_profile::PlaybackService;
use vibe_provider::DelegatedProvider;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session_tokens: Arc<SessionTokenService>,
    pub playback: Arc<PlaybackService>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        session_tokens: SessionTokenService,
        provider: Arc<dyn DelegatedProvider>,
    ) -> Self {
        Self {
            pool,
            session_tokens: Arc::new(session_tokens),
            playback: Arc::new(PlaybackService::new(provider)),
        }
    }
}
