use crate::current_track::CurrentlyPlayingPayload;
use crate::{CurrentTrack, DelegatedProvider, ProviderError, Result as ProviderResult, TokenGrant};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, StatusCode};

const REFRESH_OPERATION: &str = "token refresh";
const CURRENTLY_PLAYING_OPERATION: &str = "currently-playing fetch";

/// Connection settings for [`SpotifyClient`]
#[derive(Clone)]
pub struct SpotifyClientConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Base URL of the accounts service (token endpoint)
    pub accounts_url: String,
    /// Base URL of the Web API
    pub api_url: String,
    pub timeout: Duration,
}

/// HTTP client for the Spotify accounts service and Web API
pub struct SpotifyClient {
    client_id: String,
    client_secret: String,
    accounts_url: String,
    api_url: String,
    http: ReqwestClient,
}

impl SpotifyClient {
    #[track_caller]
    pub fn new(config: SpotifyClientConfig) -> ProviderResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Configuration {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client_id: config.client_id,
            client_secret: config.client_secret,
            accounts_url: config.accounts_url.trim_end_matches('/').to_string(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            http,
        })
    }
}

#[async_trait]
impl DelegatedProvider for SpotifyClient {
    async fn refresh_access_token(&self, refresh_token: &str) -> ProviderResult<TokenGrant> {
        let url = format!("{}/api/token", self.accounts_url);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::http(REFRESH_OPERATION, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider token refresh rejected with status {}", status);
            return Err(ProviderError::status(REFRESH_OPERATION, status));
        }

        let grant: TokenGrant = response
            .json()
            .await
            .map_err(|e| ProviderError::http(REFRESH_OPERATION, e))?;

        debug!(
            "Provider token refreshed (expires_in={}s, rotated={})",
            grant.expires_in,
            grant.new_refresh_token().is_some()
        );

        Ok(grant)
    }

    async fn currently_playing(&self, access_token: &str) -> ProviderResult<Option<CurrentTrack>> {
        let url = format!("{}/v1/me/player/currently-playing", self.api_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ProviderError::http(CURRENTLY_PLAYING_OPERATION, e))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            warn!("Provider currently-playing fetch failed with status {}", status);
            return Err(ProviderError::status(CURRENTLY_PLAYING_OPERATION, status));
        }

        let payload: CurrentlyPlayingPayload = response
            .json()
            .await
            .map_err(|e| ProviderError::http(CURRENTLY_PLAYING_OPERATION, e))?;

        Ok(payload.into_track())
    }
}
