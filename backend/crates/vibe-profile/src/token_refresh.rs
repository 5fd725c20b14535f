use crate::error::StorageContext;
use crate::{ProfileError, Result as ProfileResult};

use vibe_core::{DelegatedTokens, UserIdentity};
use vibe_db::UserRepository;
use vibe_provider::{DelegatedProvider, ProviderError};

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use log::{info, warn};
use sqlx::SqlitePool;

/// Keeps a user's delegated provider tokens usable.
///
/// Refreshes are not deduplicated: concurrent callers that both see an expired
/// token each run their own exchange.
pub struct TokenRefreshCoordinator {
    provider: Arc<dyn DelegatedProvider>,
}

impl TokenRefreshCoordinator {
    pub fn new(provider: Arc<dyn DelegatedProvider>) -> Self {
        Self { provider }
    }

    /// Access token to use for `user` right now, refreshing it first if expired.
    pub async fn ensure_fresh_at(
        &self,
        pool: &SqlitePool,
        user: &UserIdentity,
        now: DateTime<Utc>,
    ) -> ProfileResult<String> {
        if !user.tokens.is_expired_at(now) {
            return Ok(user.tokens.access_token.clone());
        }

        let tokens = self.refresh_at(pool, user, now).await?;
        Ok(tokens.access_token)
    }

    /// Exchange the stored refresh token and persist the new triple.
    ///
    /// Nothing is written when the provider fails or grants a lifetime that
    /// cannot be represented. A response without a refresh token keeps the
    /// stored one.
    pub async fn refresh_at(
        &self,
        pool: &SqlitePool,
        user: &UserIdentity,
        now: DateTime<Utc>,
    ) -> ProfileResult<DelegatedTokens> {
        let grant = self
            .provider
            .refresh_access_token(&user.tokens.refresh_token)
            .await
            .map_err(|e| {
                warn!("Delegated token refresh failed for user {}: {}", user.id, e);
                ProfileError::upstream(e)
            })?;

        let expires_at = TimeDelta::try_seconds(grant.expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                warn!(
                    "Provider granted an out-of-range lifetime ({}s) for user {}",
                    grant.expires_in, user.id
                );
                ProfileError::upstream(ProviderError::invalid_response(
                    "token refresh",
                    format!("expires_in {} is out of range", grant.expires_in),
                ))
            })?;

        let refresh_token = grant
            .new_refresh_token()
            .map(str::to_string)
            .unwrap_or_else(|| user.tokens.refresh_token.clone());

        let tokens = DelegatedTokens::new(grant.access_token, refresh_token, expires_at);

        UserRepository::update_tokens(pool, user.id, &tokens, now)
            .await
            .storage("persist refreshed tokens")?;

        info!(
            "Refreshed delegated tokens for user {} (expires {})",
            user.id, tokens.expires_at
        );

        Ok(tokens)
    }
}
