use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS,
    MIN_JWT_SECRET_LENGTH, MIN_SESSION_TTL_SECS,
};

use std::fmt;

use serde::Deserialize;

/// Session token signing settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret, at least 32 bytes
    pub jwt_secret: Option<String>,
    pub session_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set VIBE_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(MIN_SESSION_TTL_SECS..=MAX_SESSION_TTL_SECS).contains(&self.session_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_secs must be {}-{}, got {}",
                MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        Ok(())
    }
}
