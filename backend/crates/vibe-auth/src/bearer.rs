use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly `<scheme> <token>` where the scheme is `Bearer`
/// in any letter case.
#[track_caller]
pub fn parse_bearer(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
            if token.is_empty() {
                return Err(AuthError::InvalidToken {
                    message: "empty bearer token".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Ok(token)
        }
        _ => Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
