use crate::error::StorageContext;
use crate::{ProfileError, Result as ProfileResult, TokenRefreshCoordinator};

use vibe_core::LastPlayedSong;
use vibe_db::UserRepository;
use vibe_provider::DelegatedProvider;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Result of a currently-playing update, shaped as the response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlaybackUpdate {
    /// The client described the track itself
    Reported {
        currently_playing: String,
        last_played_song: LastPlayedSong,
        user_last_active_at: i64,
    },
    /// The track was fetched from the provider; empty when nothing is playing
    Polled {
        currently_playing: String,
        user_last_active_at: i64,
    },
}

pub struct PlaybackService {
    provider: Arc<dyn DelegatedProvider>,
    refresher: TokenRefreshCoordinator,
}

impl PlaybackService {
    pub fn new(provider: Arc<dyn DelegatedProvider>) -> Self {
        Self {
            refresher: TokenRefreshCoordinator::new(Arc::clone(&provider)),
            provider,
        }
    }

    pub async fn update_currently_playing(
        &self,
        pool: &SqlitePool,
        user_id: Uuid,
        song: Option<LastPlayedSong>,
    ) -> ProfileResult<PlaybackUpdate> {
        self.update_currently_playing_at(pool, user_id, song, Utc::now())
            .await
    }

    /// Record what `user_id` is listening to.
    ///
    /// With `song` the client-supplied track is stored as is. Without it the
    /// provider is polled, refreshing the delegated token first if it expired.
    pub async fn update_currently_playing_at(
        &self,
        pool: &SqlitePool,
        user_id: Uuid,
        song: Option<LastPlayedSong>,
        now: DateTime<Utc>,
    ) -> ProfileResult<PlaybackUpdate> {
        let last_active = now.timestamp();

        match song {
            Some(song) => {
                let descriptor = song.descriptor();

                let updated = UserRepository::update_playback(
                    pool,
                    user_id,
                    &descriptor,
                    Some(&song),
                    last_active,
                )
                .await
                .storage("record reported track")?;
                if !updated {
                    return Err(ProfileError::user_not_found(user_id));
                }

                debug!("User {} reported track '{}'", user_id, descriptor);

                Ok(PlaybackUpdate::Reported {
                    currently_playing: descriptor,
                    last_played_song: song,
                    user_last_active_at: last_active,
                })
            }
            None => self.poll_provider(pool, user_id, now).await,
        }
    }

    async fn poll_provider(
        &self,
        pool: &SqlitePool,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> ProfileResult<PlaybackUpdate> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .storage("load user")?
            .ok_or_else(|| ProfileError::user_not_found(user_id))?;

        let access_token = self.refresher.ensure_fresh_at(pool, &user, now).await?;

        let track = self
            .provider
            .currently_playing(&access_token)
            .await
            .map_err(ProfileError::upstream)?;

        let descriptor = track.map(|t| t.descriptor()).unwrap_or_default();
        let last_active = now.timestamp();

        UserRepository::update_playback(pool, user_id, &descriptor, None, last_active)
            .await
            .storage("record polled track")?;

        info!("Polled currently playing for user {}", user_id);

        Ok(PlaybackUpdate::Polled {
            currently_playing: descriptor,
            user_last_active_at: last_active,
        })
    }
}
