//! Phone normalization
//!
//! Free-form input ("650-555-0100", "(650) 555 0100", "+1 650 555 0100") is
//! parsed with libphonenumber metadata and rendered as E.164. Numbers without
//! a country prefix are read as US numbers.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use phonenumber::{Mode, country};
use serde::{Deserialize, Serialize};

const DEFAULT_REGION: country::Id = country::Id::US;

/// A phone number in canonical E.164 form (`+16505550100`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and canonicalize user input
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        let trimmed = raw.trim();
        let invalid = || CoreError::InvalidPhoneNumber {
            value: trimmed.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        if trimmed.is_empty() {
            return Err(invalid());
        }

        let number = phonenumber::parse(Some(DEFAULT_REGION), trimmed).map_err(|_| invalid())?;
        if !phonenumber::is_valid(&number) {
            return Err(invalid());
        }

        Ok(Self(number.format().mode(Mode::E164).to_string()))
    }

    /// Wrap a value that was normalized before it was stored
    pub fn from_e164(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
