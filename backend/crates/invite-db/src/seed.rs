use crate::{DbError, Result as DbErrorResult};

use invite_core::{Course, StudyTest};

use std::path::Path;

use serde::Deserialize;

/// Feed content shipped as JSON: `{"courses": [...], "tests": [...]}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentSeed {
    pub courses: Vec<Course>,
    pub tests: Vec<StudyTest>,
}

impl ContentSeed {
    pub fn from_json(json: &str) -> DbErrorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn from_file(path: &Path) -> DbErrorResult<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| {
                DbError::initialization(format!(
                    "Failed to read seed file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        Self::from_json(&json)
    }
}
