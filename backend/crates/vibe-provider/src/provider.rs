use crate::{CurrentTrack, Result as ProviderResult, TokenGrant};

use async_trait::async_trait;

/// The two provider operations the profile services depend on.
#[async_trait]
pub trait DelegatedProvider: Send + Sync {
    /// Exchange `refresh_token` for a new access token.
    async fn refresh_access_token(&self, refresh_token: &str) -> ProviderResult<TokenGrant>;

    /// Fetch the track currently playing for the owner of `access_token`.
    ///
    /// `Ok(None)` means nothing is playing.
    async fn currently_playing(&self, access_token: &str) -> ProviderResult<Option<CurrentTrack>>;
}
