mod auth_config;
mod config;
mod content_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod sms_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use content_config::ContentConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sms_config::SmsConfig;

const CONFIG_DIR_ENV: &str = "INVITE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".invite";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_SMS_ENABLED: bool = false;
const DEFAULT_SMS_API_BASE: &str = "https://api.twilio.com";
const DEFAULT_SMS_BRAND: &str = "thavma.club";

const DEFAULT_SCHOOL: &str = "gunn";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
