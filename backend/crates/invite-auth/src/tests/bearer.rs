use crate::{AuthError, bearer_token};

use googletest::prelude::*;

#[test]
fn given_bearer_header_when_parsed_then_returns_token() {
    let token = bearer_token(Some("Bearer abc.def.ghi")).unwrap();

    assert_that!(token, eq("abc.def.ghi"));
}

#[test]
fn given_no_header_when_parsed_then_missing_header_with_invalid_jwt_message() {
    let result = bearer_token(None);

    assert!(matches!(result, Err(AuthError::MissingHeader { .. })));
    assert_that!(result.unwrap_err().client_message(), eq("Invalid JWT"));
}

#[test]
fn given_blank_header_when_parsed_then_missing_header() {
    assert!(matches!(
        bearer_token(Some("   ")),
        Err(AuthError::MissingHeader { .. })
    ));
}

#[test]
fn given_basic_scheme_when_parsed_then_invalid_scheme() {
    assert!(matches!(
        bearer_token(Some("Basic dXNlcjpwYXNz")),
        Err(AuthError::InvalidScheme { .. })
    ));
}

#[test]
fn given_padded_or_empty_bearer_when_parsed_then_trimmed_or_rejected() {
    assert!(matches!(
        bearer_token(Some("Bearer    x")).map(str::len),
        Ok(1)
    ));
    assert!(matches!(
        bearer_token(Some("Bearer ")),
        Err(AuthError::InvalidScheme { .. }) | Err(AuthError::InvalidToken { .. })
    ));
}
