use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_IDENTITY_LENGTH: usize = 128;

/// Opaque principal id issued by the auth provider (the JWT `sub`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    #[track_caller]
    pub fn new(value: impl Into<String>) -> CoreErrorResult<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(CoreError::InvalidIdentity {
                message: "identity cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if value.len() > MAX_IDENTITY_LENGTH {
            return Err(CoreError::InvalidIdentity {
                message: format!("identity exceeds {} characters", MAX_IDENTITY_LENGTH),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
