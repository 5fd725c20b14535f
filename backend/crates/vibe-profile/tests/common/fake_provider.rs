use vibe_provider::{CurrentTrack, DelegatedProvider, ProviderError, TokenGrant};

use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Scripted provider that records every call
pub struct FakeProvider {
    grant: Option<TokenGrant>,
    track: Option<CurrentTrack>,
    playback_fails: bool,
    refresh_calls: AtomicUsize,
    playback_calls: AtomicUsize,
    refresh_tokens_seen: Mutex<Vec<String>>,
    access_tokens_seen: Mutex<Vec<String>>,
}

impl FakeProvider {
    /// Refresh succeeds with `grant`; nothing is playing
    pub fn new(grant: TokenGrant) -> Self {
        Self {
            grant: Some(grant),
            track: None,
            playback_fails: false,
            refresh_calls: AtomicUsize::new(0),
            playback_calls: AtomicUsize::new(0),
            refresh_tokens_seen: Mutex::new(Vec::new()),
            access_tokens_seen: Mutex::new(Vec::new()),
        }
    }

    /// Every refresh is rejected by the provider
    pub fn rejecting_refresh() -> Self {
        Self {
            grant: None,
            ..Self::new(grant("unused", 0, None))
        }
    }

    pub fn playing(mut self, title: &str, artists: &[&str]) -> Self {
        self.track = Some(CurrentTrack {
            title: title.to_string(),
            artists: artists.iter().map(|a| a.to_string()).collect(),
        });
        self
    }

    pub fn failing_playback(mut self) -> Self {
        self.playback_fails = true;
        self
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn playback_calls(&self) -> usize {
        self.playback_calls.load(Ordering::SeqCst)
    }

    pub fn refresh_tokens_seen(&self) -> Vec<String> {
        self.refresh_tokens_seen.lock().unwrap().clone()
    }

    pub fn access_tokens_seen(&self) -> Vec<String> {
        self.access_tokens_seen.lock().unwrap().clone()
    }
}

pub fn grant(access_token: &str, expires_in: i64, refresh_token: Option<&str>) -> TokenGrant {
    TokenGrant {
        access_token: access_token.to_string(),
        token_type: Some("Bearer".to_string()),
        expires_in,
        refresh_token: refresh_token.map(String::from),
        scope: None,
    }
}

fn rejected(operation: &'static str, status: u16) -> ProviderError {
    ProviderError::Status {
        operation,
        status,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl DelegatedProvider for FakeProvider {
    async fn refresh_access_token(&self, refresh_token: &str) -> vibe_provider::Result<TokenGrant> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.refresh_tokens_seen
            .lock()
            .unwrap()
            .push(refresh_token.to_string());

        self.grant
            .clone()
            .ok_or_else(|| rejected("token refresh", 400))
    }

    async fn currently_playing(
        &self,
        access_token: &str,
    ) -> vibe_provider::Result<Option<CurrentTrack>> {
        self.playback_calls.fetch_add(1, Ordering::SeqCst);
        self.access_tokens_seen
            .lock()
            .unwrap()
            .push(access_token.to_string());

        if self.playback_fails {
            return Err(rejected("currently-playing fetch", 401));
        }

        Ok(self.track.clone())
    }
}
