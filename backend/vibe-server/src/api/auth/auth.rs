//! Session issuance handlers

use crate::{ApiResult, AppState, BearerToken, LoginResponse, SpotifyLoginRequest, TokenResponse};

use vibe_profile::AccountService;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /auth/spotify
pub async fn spotify_login(
    State(state): State<AppState>,
    payload: Result<Json<SpotifyLoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;

    let outcome = AccountService::login(&state.pool, req.into()).await?;
    let token = state.session_tokens.issue(outcome.user_id)?;

    log::info!(
        "Issued session for user {} (new: {})",
        outcome.user_id,
        outcome.is_new_user
    );

    Ok(Json(LoginResponse {
        token,
        user: outcome.user,
        is_new_user: outcome.is_new_user,
    }))
}

/// POST /auth/refresh
pub async fn refresh_session(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.session_tokens.refresh(&token)?;

    Ok(Json(TokenResponse { token }))
}
