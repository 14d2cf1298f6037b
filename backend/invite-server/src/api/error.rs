//! REST API error types
//!
//! Every failure leaves the server as `{message, code}` where `code` is the
//! numeric HTTP status.

use invite_auth::AuthError;
use invite_core::CoreError;
use invite_db::DbError;
use invite_sms::SmsError;

use std::error::Error as StdError;
use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, Method, StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    pub code: u16,
}

/// Error kinds and the status each maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Unauthorized,
    BadRequest,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    ServerError,
}

impl ApiErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or rejected credential (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Wrong verb for the route (405)
    #[error("Method {method} not allowed (allow: {allow}) {location}")]
    MethodNotAllowed {
        method: Method,
        allow: &'static str,
        location: ErrorLocation,
    },

    /// State conflict, e.g. a code that is already claimed (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `source` stays server-side.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn method_not_allowed(method: Method, allow: &'static str) -> Self {
        ApiError::MethodNotAllowed {
            method,
            allow,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            source: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        ApiError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Unauthorized { .. } => ApiErrorKind::Unauthorized,
            ApiError::BadRequest { .. } => ApiErrorKind::BadRequest,
            ApiError::Forbidden { .. } => ApiErrorKind::Forbidden,
            ApiError::NotFound { .. } => ApiErrorKind::NotFound,
            ApiError::MethodNotAllowed { .. } => ApiErrorKind::MethodNotAllowed,
            ApiError::Conflict { .. } => ApiErrorKind::Conflict,
            ApiError::Internal { .. } => ApiErrorKind::ServerError,
        }
    }

    /// Message sent to the client
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Internal { message, .. } => message.clone(),
            ApiError::MethodNotAllowed { method, .. } => format!("Method {} Not Allowed", method),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = kind.status();
        let message = self.message();

        // 401s are routine; keep them to one line without the chain
        match (kind, self.source()) {
            (ApiErrorKind::Unauthorized, _) => {
                log::warn!("API {}: {}", status.as_u16(), message)
            }
            (_, Some(source)) => log::error!("API {}: {}: {}", status.as_u16(), self, source),
            (_, None) => log::error!("API {}: {}", status.as_u16(), self),
        }

        let body = Json(ErrorEnvelope {
            message,
            code: status.as_u16(),
        });

        match self {
            ApiError::MethodNotAllowed { allow, .. } => {
                let mut response = (status, body).into_response();
                response
                    .headers_mut()
                    .insert(ALLOW, HeaderValue::from_static(allow));
                response
            }
            _ => (status, body).into_response(),
        }
    }
}

/// Credential failures become 401 with a client-safe message
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Credential rejected: {}", e);
        ApiError::Unauthorized {
            message: e.client_message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let message = match e {
            CoreError::InvalidPhoneNumber { .. } => "Invalid phone number",
            CoreError::InvalidIdentity { .. } => "Invalid user",
        };
        ApiError::BadRequest {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        ApiError::internal_with_source("Database operation failed", e)
    }
}

impl From<SmsError> for ApiError {
    #[track_caller]
    fn from(e: SmsError) -> Self {
        ApiError::internal_with_source("Failed to send invite codes", e)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
