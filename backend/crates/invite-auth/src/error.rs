use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Message safe to hand back to an unauthenticated caller
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::TokenExpired { .. } => "JWT expired",
            Self::InvalidClaim { .. } => "Invalid user",
            Self::InvalidToken { .. }
            | Self::MissingHeader { .. }
            | Self::InvalidScheme { .. }
            | Self::JwtDecode { .. } => "Invalid JWT",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
