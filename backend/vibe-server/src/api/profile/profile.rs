//! Profile REST API handlers

use crate::{ApiError, ApiResult, AppState, AuthenticatedUser};

use vibe_core::{LastPlayedSong, ProfileUpdate, UserProfile};
use vibe_profile::{PlaybackUpdate, ProfileAggregator, ProfileSynchronizer};

use std::panic::Location;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
};
use error_location::ErrorLocation;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> ApiResult<Json<UserProfile>> {
    let profile = ProfileAggregator::get_full_profile(&state.pool, user_id).await?;

    Ok(Json(profile))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> ApiResult<Json<UserProfile>> {
    let Json(update) = payload?;

    let profile = ProfileSynchronizer::update_profile(&state.pool, user_id, &update).await?;

    Ok(Json(profile))
}

/// PUT /api/profile/currently-playing
///
/// A track document records what the client reports. An empty body or
/// `null` polls the provider instead.
pub async fn update_currently_playing(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    body: Bytes,
) -> ApiResult<Json<PlaybackUpdate>> {
    let song = parse_reported_song(&body)?;

    let update = state
        .playback
        .update_currently_playing(&state.pool, user_id, song)
        .await?;

    Ok(Json(update))
}

#[track_caller]
pub(crate) fn parse_reported_song(body: &[u8]) -> ApiResult<Option<LastPlayedSong>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Option<LastPlayedSong>>(body).map_err(|e| ApiError::Validation {
        message: format!("Invalid currently-playing document: {}", e),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    })
}
