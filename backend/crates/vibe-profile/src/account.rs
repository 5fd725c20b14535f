use crate::error::StorageContext;
use crate::{ProfileAggregator, ProfileError, Result as ProfileResult};

use vibe_core::{DelegatedTokens, UserIdentity, UserProfile};
use vibe_db::UserRepository;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Credentials obtained by the client from the provider's authorization flow
#[derive(Clone)]
pub struct LoginRequest {
    pub spotify_uri: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user_id: Uuid,
    /// Present only for accounts that already existed
    pub user: Option<UserProfile>,
    pub is_new_user: bool,
}

/// Registers users on first login and refreshes their stored credentials after.
pub struct AccountService;

impl AccountService {
    pub async fn login(pool: &SqlitePool, request: LoginRequest) -> ProfileResult<LoginOutcome> {
        Self::validate(&request)?;

        let tokens = DelegatedTokens::new(
            request.access_token,
            request.refresh_token,
            request.expires_at,
        );

        let existing = UserRepository::find_by_spotify_uri(pool, &request.spotify_uri)
            .await
            .storage("look up user by provider uri")?;

        let user = match existing {
            Some(user) => user,
            None => {
                let candidate = UserIdentity::new(request.spotify_uri.clone(), tokens.clone());
                let inserted = UserRepository::insert_if_absent(pool, &candidate)
                    .await
                    .storage("create user")?;

                if inserted {
                    info!("Registered new user {}", candidate.id);
                    return Ok(LoginOutcome {
                        user_id: candidate.id,
                        user: None,
                        is_new_user: true,
                    });
                }

                // A concurrent login registered the same account first
                UserRepository::find_by_spotify_uri(pool, &request.spotify_uri)
                    .await
                    .storage("look up user by provider uri")?
                    .ok_or_else(|| ProfileError::NotFound {
                        message: "User for provider account not found".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })?
            }
        };

        UserRepository::update_tokens(pool, user.id, &tokens, Utc::now())
            .await
            .storage("store login tokens")?;

        let profile = ProfileAggregator::get_full_profile(pool, user.id).await?;

        info!("User {} logged in", user.id);

        Ok(LoginOutcome {
            user_id: user.id,
            user: Some(profile),
            is_new_user: false,
        })
    }

    #[track_caller]
    fn validate(request: &LoginRequest) -> ProfileResult<()> {
        let required = [
            ("spotify_uri", &request.spotify_uri),
            ("access_token", &request.access_token),
            ("refresh_token", &request.refresh_token),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ProfileError::invalid_argument(
                    field,
                    format!("{} is required", field),
                ));
            }
        }

        Ok(())
    }
}
