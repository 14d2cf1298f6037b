//! Invite code REST API handlers

use crate::{
    AccessResponse, ApiError, ApiResult, AppState, AuthIdentity, ClaimRequest, ClaimResponse,
    CodeAvailabilityResponse, CodeRedeemer, JsonBody,
};

use invite_core::ClaimOutcome;

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /api/codes/claim
///
/// 200 when this call moved the code to the caller, 409 when the code is
/// unknown or already held by anyone (the caller included).
pub async fn claim_code(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    JsonBody(req): JsonBody<ClaimRequest>,
) -> ApiResult<Json<ClaimResponse>> {
    let code = req.code.trim();
    if code.is_empty() {
        return Err(ApiError::bad_request("Invite code required"));
    }

    let redeemer = CodeRedeemer::new(&state);
    match redeemer.redeem(code, &identity).await? {
        ClaimOutcome::Claimed => Ok(Json(ClaimResponse {
            access: true,
            code: code.to_string(),
        })),
        ClaimOutcome::Unavailable => Err(ApiError::conflict("Invite code unavailable")),
    }
}

/// GET /api/access
pub async fn check_access(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
) -> ApiResult<Json<AccessResponse>> {
    let redeemer = CodeRedeemer::new(&state);
    let access = redeemer.has_access(&identity).await?;

    Ok(Json(AccessResponse { access }))
}

/// GET /api/codes/{id}
///
/// Lets the join page check a code before sending the visitor through login.
pub async fn code_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CodeAvailabilityResponse>> {
    let redeemer = CodeRedeemer::new(&state);
    let available = redeemer.is_available(&id).await?;

    Ok(Json(CodeAvailabilityResponse { id, available }))
}
