use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid phone number: {value} {location}")]
    InvalidPhoneNumber {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity: {message} {location}")]
    InvalidIdentity {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
