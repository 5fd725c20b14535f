
use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// RAII guard for environment variables - restores the previous value on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point VIBE_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("VIBE_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set the secrets validate() insists on
pub(crate) fn set_required_secrets() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("VIBE_AUTH_JWT_SECRET", VALID_SECRET),
        EnvGuard::set("VIBE_PROVIDER_CLIENT_ID", "client-id"),
        EnvGuard::set("VIBE_PROVIDER_CLIENT_SECRET", "client-secret"),
    ]
}
