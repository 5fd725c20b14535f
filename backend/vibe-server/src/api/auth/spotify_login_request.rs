use vibe_profile::LoginRequest;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Credentials from the client's provider authorization flow.
///
/// Empty strings are rejected by the account service with the offending field.
#[derive(Deserialize)]
pub struct SpotifyLoginRequest {
    #[serde(default)]
    pub spotify_uri: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub expiry_date: DateTime<Utc>,
}

impl From<SpotifyLoginRequest> for LoginRequest {
    fn from(req: SpotifyLoginRequest) -> Self {
        Self {
            spotify_uri: req.spotify_uri,
            access_token: req.access_token,
            refresh_token: req.refresh_token,
            expires_at: req.expiry_date,
        }
    }
}
