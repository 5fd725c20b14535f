use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;
use uuid::Uuid;

/// Issues and validates HS256 session tokens.
///
/// A token is valid up to and including its `exp` second. Refreshing re-issues
/// a fresh token; earlier tokens stay valid until they expire on their own.
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionTokenService {
    pub fn with_hs256(secret: &[u8], ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `validate_at`
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    #[track_caller]
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> AuthErrorResult<String> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Issued session token for user {} (exp {})", user_id, claims.exp);

        Ok(token)
    }

    pub fn validate(&self, token: &str) -> AuthErrorResult<Uuid> {
        self.validate_at(token, Utc::now())
    }

    /// Verify signature and expiry of `token` as of `now`, returning its user id.
    #[track_caller]
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Uuid> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|source| AuthError::JwtDecode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let claims = token_data.claims;
        if now.timestamp() > claims.exp {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.user_id()
    }

    pub fn refresh(&self, token: &str) -> AuthErrorResult<String> {
        self.refresh_at(token, Utc::now())
    }

    /// Validate `token` and issue a new one for the same user.
    pub fn refresh_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<String> {
        let user_id = self.validate_at(token, now)?;
        self.issue_at(user_id, now)
    }
}
