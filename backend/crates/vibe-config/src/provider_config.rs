use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL,
    DEFAULT_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS, MIN_PROVIDER_TIMEOUT_SECS,
};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// Music provider OAuth client settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub accounts_url: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            accounts_url: String::from(DEFAULT_ACCOUNTS_URL),
            api_url: String::from(DEFAULT_API_URL),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("accounts_url", &self.accounts_url)
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::provider(
                "provider.client_id is required (set VIBE_PROVIDER_CLIENT_ID)",
            ));
        }

        if self.client_secret.trim().is_empty() {
            return Err(ConfigError::provider(
                "provider.client_secret is required (set VIBE_PROVIDER_CLIENT_SECRET)",
            ));
        }

        Self::validate_url("provider.accounts_url", &self.accounts_url)?;
        Self::validate_url("provider.api_url", &self.api_url)?;

        if !(MIN_PROVIDER_TIMEOUT_SECS..=MAX_PROVIDER_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::provider(format!(
                "provider.timeout_secs must be {}-{}, got {}",
                MIN_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate_url(key: &str, value: &str) -> ConfigErrorResult<()> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::provider(format!(
                "{} must start with http:// or https://, got '{}'",
                key, value
            )))
        }
    }
}
