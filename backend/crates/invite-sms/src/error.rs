use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmsError {
    #[error("SMS request failed: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("SMS gateway rejected message (status {status}): {message} {location}")]
    Gateway {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

impl SmsError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SmsError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn gateway(status: u16, message: impl Into<String>) -> Self {
        SmsError::Gateway {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SmsError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SmsError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, SmsError>;
