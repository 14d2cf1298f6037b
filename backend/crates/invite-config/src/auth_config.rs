use crate::{ConfigError, ConfigErrorResult, MIN_JWT_SECRET_LENGTH};

use std::path::Path;

use serde::Deserialize;

/// Bearer token verification. Exactly one of the two keys must be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 shared secret (the auth provider's JWT secret)
    pub jwt_secret: Option<String>,
    /// RS256 public key, PEM, relative to the config directory
    pub jwt_public_key_path: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.jwt_secret or auth.jwt_public_key_path is required",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "set only one of auth.jwt_secret and auth.jwt_public_key_path",
            )),
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                Ok(())
            }
            (None, Some(key_path)) => {
                let path = Path::new(key_path);
                if path.is_absolute() || key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative and cannot contain '..'",
                    ));
                }
                if !config_dir.join(path).is_file() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        config_dir.join(path).display()
                    )));
                }
                Ok(())
            }
        }
    }

    pub fn algorithm_name(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}
