use crate::Config;
use crate::tests::{EnvGuard, setup_valid_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_relative_seed_path_when_validate_then_ok() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_config_dir();
    let _seed = EnvGuard::set("INVITE_CONTENT_SEED_PATH", "seed/content.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_seed_path_escaping_config_dir_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_config_dir();
    let _seed = EnvGuard::set("INVITE_CONTENT_SEED_PATH", "../content.json");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("seed_path"));
}

#[test]
#[serial]
fn given_blank_default_school_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_config_dir();
    let _school = EnvGuard::set("INVITE_CONTENT_DEFAULT_SCHOOL", "  ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("default_school"));
}
