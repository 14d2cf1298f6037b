//! User REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthIdentity, CodeIssuer, CreateUserRequest, JsonBody,
    UserResponse,
};

use invite_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
};

/// POST /api/users
///
/// Records the caller's phone number, mints two invite codes and texts them
/// to that number.
pub async fn create_user(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let raw_phone = req.phone.unwrap_or_default();

    let issuer = CodeIssuer::new(&state);
    let user = issuer.issue(&identity, &raw_phone).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/users/me
pub async fn current_user(
    State(state): State<AppState>,
    AuthIdentity(identity): AuthIdentity,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(&identity)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}

/// Any verb other than POST on /api/users
pub async fn users_method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(method, "POST")
}
