use crate::{CoreError, PhoneNumber};

use googletest::prelude::*;

#[test]
fn given_dashed_us_number_when_parsed_then_normalizes_to_e164() {
    let phone = PhoneNumber::parse("650-555-0100").unwrap();

    assert_that!(phone.as_str(), eq("+16505550100"));
}

#[test]
fn given_formatted_variants_when_parsed_then_all_normalize_identically() {
    let inputs = ["(650) 555-0100", "650.555.0100", "+1 650 555 0100", "  6505550100 "];

    for input in inputs {
        let phone = PhoneNumber::parse(input).unwrap();
        assert_that!(phone.as_str(), eq("+16505550100"), "input: {input}");
    }
}

#[test]
fn given_international_number_when_parsed_then_keeps_country_code() {
    let phone = PhoneNumber::parse("+44 20 7946 0958").unwrap();

    assert_that!(phone.as_str(), eq("+442079460958"));
}

#[test]
fn given_garbage_when_parsed_then_invalid_phone_error() {
    let result = PhoneNumber::parse("not a phone");

    assert!(matches!(
        result,
        Err(CoreError::InvalidPhoneNumber { .. })
    ));
}

#[test]
fn given_too_few_digits_when_parsed_then_rejected() {
    assert_that!(PhoneNumber::parse("555-0100"), err(anything()));
    assert_that!(PhoneNumber::parse("123"), err(anything()));
}

#[test]
fn given_empty_input_when_parsed_then_rejected() {
    assert_that!(PhoneNumber::parse(""), err(anything()));
    assert_that!(PhoneNumber::parse("   "), err(anything()));
}

#[test]
fn test_phone_number_serializes_as_plain_string() {
    let phone = PhoneNumber::from_e164("+16505550100");

    let json = serde_json::to_string(&phone).unwrap();

    assert_eq!(json, "\"+16505550100\"");
}
