use crate::{ApiError, ApiErrorKind};

use invite_auth::bearer_token;
use invite_core::PhoneNumber;
use invite_sms::SmsError;

use std::error::Error;

use axum::response::IntoResponse;
use http::{Method, StatusCode, header::ALLOW};
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[test]
fn test_kind_status_table() {
    let table = [
        (ApiErrorKind::Unauthorized, 401),
        (ApiErrorKind::BadRequest, 400),
        (ApiErrorKind::Forbidden, 403),
        (ApiErrorKind::NotFound, 404),
        (ApiErrorKind::MethodNotAllowed, 405),
        (ApiErrorKind::Conflict, 409),
        (ApiErrorKind::ServerError, 500),
    ];

    for (kind, code) in table {
        assert_eq!(kind.status().as_u16(), code, "{kind:?}");
    }
}

#[tokio::test]
async fn test_not_found_returns_envelope() {
    let response = ApiError::not_found("User not found").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User not found");
    assert_eq!(json["code"], 404);
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_method_not_allowed_sets_allow_header() {
    let response = ApiError::method_not_allowed(Method::DELETE, "POST").into_response();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers().get(ALLOW).unwrap(), "POST");
    let json = body_json(response).await;
    assert_eq!(json["message"], "Method DELETE Not Allowed");
    assert_eq!(json["code"], 405);
}

#[tokio::test]
async fn test_internal_hides_detail_behind_message() {
    let response = ApiError::internal("Database operation failed").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], 500);
}

#[test]
fn test_missing_header_converts_to_invalid_jwt() {
    let api_err: ApiError = bearer_token(None).unwrap_err().into();

    assert_eq!(api_err.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(api_err.message(), "Invalid JWT");
}

#[test]
fn test_invalid_phone_converts_to_bad_request() {
    let core_err = PhoneNumber::parse("not a phone").unwrap_err();
    let api_err: ApiError = core_err.into();

    assert_eq!(api_err.kind(), ApiErrorKind::BadRequest);
    assert_eq!(api_err.message(), "Invalid phone number");
}

#[tokio::test]
async fn test_sms_failure_keeps_cause_server_side() {
    let api_err: ApiError = SmsError::gateway(503, "gateway unavailable").into();

    assert_eq!(api_err.kind(), ApiErrorKind::ServerError);
    let cause = api_err.source().expect("cause retained").to_string();
    assert!(cause.contains("gateway unavailable"));

    let json = body_json(api_err.into_response()).await;
    assert_eq!(json["message"], "Failed to send invite codes");
    assert!(!json.to_string().contains("gateway unavailable"));
}

#[test]
fn test_plain_internal_has_no_cause() {
    assert!(ApiError::internal("boom").source().is_none());
}
