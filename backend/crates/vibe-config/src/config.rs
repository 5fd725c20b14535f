use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ProviderConfig,
    ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "VIBE_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".vibe";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from disk and environment.
    ///
    /// Loading order:
    /// 1. VIBE_CONFIG_DIR env var, else ./.vibe/
    /// 2. Auto-create the config directory if missing
    /// 3. Read config.toml if it exists, else use defaults
    /// 4. Apply VIBE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: VIBE_CONFIG_DIR env var > ./.vibe/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate every section. Call after load() so bad settings fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.provider.validate()?;
        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Directory for file logging, resolved against the config directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        let dir = Path::new(&self.logging.dir);
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }
        Ok(Self::config_dir()?.join(dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  auth: HS256 ({}), session ttl {}s",
            if self.auth.jwt_secret.is_some() {
                "secret set"
            } else {
                "secret missing"
            },
            self.auth.session_ttl_secs
        );
        info!(
            "  provider: accounts={}, api={}, timeout={}s, client_id {}",
            self.provider.accounts_url,
            self.provider.api_url,
            self.provider.timeout_secs,
            if self.provider.client_id.is_empty() {
                "missing"
            } else {
                "set"
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("VIBE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("VIBE_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("VIBE_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "VIBE_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "VIBE_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Auth
        Self::apply_env_option_string("VIBE_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "VIBE_AUTH_SESSION_TTL_SECS",
            &mut self.auth.session_ttl_secs,
        );

        // Provider
        Self::apply_env_string("VIBE_PROVIDER_CLIENT_ID", &mut self.provider.client_id);
        Self::apply_env_string(
            "VIBE_PROVIDER_CLIENT_SECRET",
            &mut self.provider.client_secret,
        );
        Self::apply_env_string("VIBE_PROVIDER_ACCOUNTS_URL", &mut self.provider.accounts_url);
        Self::apply_env_string("VIBE_PROVIDER_API_URL", &mut self.provider.api_url);
        Self::apply_env_parse("VIBE_PROVIDER_TIMEOUT_SECS", &mut self.provider.timeout_secs);

        // Logging
        Self::apply_env_parse("VIBE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("VIBE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("VIBE_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("VIBE_LOG_DIR", &mut self.logging.dir);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
