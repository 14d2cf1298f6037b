//! Axum extractor for the bearer credential

use crate::{ApiError, AppState};

use invite_auth::bearer_token;
use invite_core::Identity;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Identity of the caller, verified from `Authorization: Bearer <jwt>`.
///
/// Rejects with 401: "Invalid JWT" when the header is missing or the token
/// does not verify, "JWT expired" for an expired token.
pub struct AuthIdentity(pub Identity);

impl FromRequestParts<AppState> for AuthIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header)?;
            let identity = state.jwt_validator.verify_identity(token)?;
            log::debug!("Authenticated request for user ({})", identity);

            Ok(AuthIdentity(identity))
        }
    }
}
