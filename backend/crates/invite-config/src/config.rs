use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, ContentConfig,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig, SmsConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub sms: SmsConfig,
    pub logging: LoggingConfig,
    pub content: ContentConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for INVITE_CONFIG_DIR env var, else use ./.invite/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply INVITE_* environment variable overrides
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

        let config_path = config_dir.join(CONFIG_FILENAME);

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

    /// Priority: INVITE_CONFIG_DIR env var > ./.invite/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.sms.validate()?;
        self.content.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn jwt_public_key_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let config_dir = Self::config_dir()?;
        Ok(self
            .auth
            .jwt_public_key_path
            .as_ref()
            .map(|path| config_dir.join(path)))
    }

    pub fn seed_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let config_dir = Self::config_dir()?;
        Ok(self
            .content
            .seed_path
            .as_ref()
            .map(|path| config_dir.join(path)))
    }

    /// None when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let config_dir = Self::config_dir()?;
        Ok(self
            .logging
            .file
            .as_ref()
            .map(|file| config_dir.join(&self.logging.dir).join(file)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!("  auth: {}", self.auth.algorithm_name());

        if self.sms.enabled {
            info!(
                "  sms: enabled via {} (from {})",
                self.sms.api_base,
                self.sms.from_phone.as_deref().unwrap_or("?")
            );
        } else {
            info!("  sms: disabled (messages are logged)");
        }

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  content: seed={}, default_school={}",
            self.content.seed_path.as_deref().unwrap_or("none"),
            self.content.default_school
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("INVITE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("INVITE_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("INVITE_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("INVITE_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "INVITE_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );

        // SMS
        Self::apply_env_bool("INVITE_SMS_ENABLED", &mut self.sms.enabled);
        Self::apply_env_option_string("INVITE_SMS_ACCOUNT_SID", &mut self.sms.account_sid);
        Self::apply_env_option_string("INVITE_SMS_AUTH_TOKEN", &mut self.sms.auth_token);
        Self::apply_env_option_string("INVITE_SMS_FROM_PHONE", &mut self.sms.from_phone);
        Self::apply_env_string("INVITE_SMS_API_BASE", &mut self.sms.api_base);
        Self::apply_env_string("INVITE_SMS_BRAND", &mut self.sms.brand);

        // Logging
        Self::apply_env_parse("INVITE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("INVITE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("INVITE_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("INVITE_LOG_DIR", &mut self.logging.dir);

        // Content
        Self::apply_env_option_string("INVITE_CONTENT_SEED_PATH", &mut self.content.seed_path);
        Self::apply_env_string(
            "INVITE_CONTENT_DEFAULT_SCHOOL",
            &mut self.content.default_school,
        );
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
