use serde::Deserialize;

/// Successful response of the refresh-token exchange
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of `access_token` in seconds
    pub expires_in: i64,
    /// Omitted when the current refresh token stays valid
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenGrant {
    /// The rotated refresh token, ignoring an empty value
    pub fn new_refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref().filter(|t| !t.is_empty())
    }
}
