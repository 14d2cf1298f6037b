use crate::LandingUrl;

use googletest::prelude::*;

#[test]
fn given_code_and_filters_when_parsed_then_all_read() {
    // When
    let landing = LandingUrl::parse("https://thavma.club/join?code=abc123&s=gunn&c=apush").unwrap();

    // Then
    assert_that!(landing.code(), some(eq("abc123")));
    assert_that!(landing.school(), some(eq("gunn")));
    assert_that!(landing.course(), some(eq("apush")));
    assert_that!(landing.is_login_handoff(), eq(false));
}

#[test]
fn given_access_token_fragment_when_parsed_then_login_handoff() {
    // When
    let landing =
        LandingUrl::parse("https://thavma.club/?code=abc123#access_token=eyJ&expires_in=3600")
            .unwrap();

    // Then
    assert_that!(landing.is_login_handoff(), eq(true));
    assert_that!(landing.code(), some(eq("abc123")));
}

#[test]
fn given_other_fragment_when_parsed_then_not_handoff() {
    // When
    let landing = LandingUrl::parse("https://thavma.club/#top").unwrap();

    // Then
    assert_that!(landing.is_login_handoff(), eq(false));
    assert_that!(landing.code(), none());
}

#[test]
fn given_empty_and_repeated_params_when_parsed_then_first_non_empty_wins() {
    // When
    let landing = LandingUrl::parse("https://thavma.club/?s=&c=bio&c=chem&code=").unwrap();

    // Then
    assert_that!(landing.school(), none());
    assert_that!(landing.course(), some(eq("bio")));
    assert_that!(landing.code(), none());
}

#[test]
fn given_relative_url_when_parsed_then_error() {
    // When
    let result = LandingUrl::parse("/join?code=abc123");

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_code_when_without_code_then_other_fields_kept() {
    // Given
    let landing = LandingUrl::parse("https://thavma.club/?code=abc123&c=bio").unwrap();

    // When
    let landing = landing.without_code();

    // Then
    assert_that!(landing.code(), none());
    assert_that!(landing.course(), some(eq("bio")));
}
