use crate::{ConfigError, ConfigErrorResult, DEFAULT_SCHOOL};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// JSON file with courses and tests, relative to the config directory
    pub seed_path: Option<String>,
    /// School used when the `s` query parameter is absent
    pub default_school: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            default_school: String::from(DEFAULT_SCHOOL),
        }
    }
}

impl ContentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref seed_path) = self.seed_path
            && (Path::new(seed_path).is_absolute() || seed_path.contains(".."))
        {
            return Err(ConfigError::content(
                "content.seed_path must be relative and cannot contain '..'",
            ));
        }

        if self.default_school.trim().is_empty() {
            return Err(ConfigError::content("content.default_school cannot be empty"));
        }

        Ok(())
    }
}
