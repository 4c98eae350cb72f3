use crate::tests::{EnvGuard, clear_overrides, setup_config_dir};
use crate::{Config, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;
use serial_test::serial;

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    assert_that!(*LogLevel::from_str("verbose").unwrap(), eq(LevelFilter::Info));
    assert_that!(*LogLevel::from_str("WARN").unwrap(), eq(LevelFilter::Warn));
}

#[test]
#[serial]
fn given_log_level_override_when_load_then_applied() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _cleared = clear_overrides();
    let _level = EnvGuard::set("TD_LOG_LEVEL", "trace");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
}

#[test]
#[serial]
fn given_log_dir_with_traversal_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _cleared = clear_overrides();
    let _key = EnvGuard::set("TD_REMOTE_API_KEY", "anon-key");
    let _dir = EnvGuard::set("TD_LOG_DIR", "../outside");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_log_file_with_separator_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _cleared = clear_overrides();
    let _key = EnvGuard::set("TD_REMOTE_API_KEY", "anon-key");
    let _file = EnvGuard::set("TD_LOG_FILE", "nested/td.log");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_no_log_file_then_log_path_is_none() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _cleared = clear_overrides();

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.log_file_path(temp.path()).is_none());
}

#[test]
fn given_no_log_file_then_destination_is_stderr() {
    let mut config = Config::default();
    assert_that!(config.log_destination(), eq("stderr"));

    config.logging.file = Some("td.log".into());
    assert_that!(config.log_destination(), eq("td.log"));
}
