mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "vibe.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 5;
const MAX_DATABASE_BUSY_TIMEOUT_SECS: u64 = 60;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;
const MIN_SESSION_TTL_SECS: i64 = 60;
const MAX_SESSION_TTL_SECS: i64 = 2_592_000;

const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
const DEFAULT_API_URL: &str = "https://api.spotify.com";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
const MIN_PROVIDER_TIMEOUT_SECS: u64 = 1;
const MAX_PROVIDER_TIMEOUT_SECS: u64 = 60;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
