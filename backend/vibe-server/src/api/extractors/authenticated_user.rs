//! Bearer-authenticated caller

use crate::{ApiError, AppState, BearerToken};

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// User id carried by a valid session token.
///
/// Handlers only ever act on this id, never on one taken from the request body.
pub struct AuthenticatedUser(pub Uuid);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        let user_id = state.session_tokens.validate(&token)?;
        log::debug!("Authenticated user {}", user_id);

        Ok(AuthenticatedUser(user_id))
    }
}
