use crate::ApiError;

use vibe_auth::{AuthError, parse_bearer};

use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// Raw session token from an `Authorization: Bearer <token>` header
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?),
            None => None,
        };

        let token = parse_bearer(header)?;

        Ok(BearerToken(token.to_string()))
    }
}
