use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, PollingConfig};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Polling
// =========================================================================

#[test]
#[serial]
fn given_status_refresh_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _refresh = EnvGuard::set("TK_STATUS_REFRESH_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_clock_tick_below_min_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _tick = EnvGuard::set("TK_CLOCK_TICK_MS", "50");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_message_dismiss_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _dismiss = EnvGuard::set("TK_MESSAGE_DISMISS_SECS", "61");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_utc_offset_out_of_range_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _offset = EnvGuard::set("TK_CLOCK_UTC_OFFSET_HOURS", "15");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_negative_utc_offset_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _offset = EnvGuard::set("TK_CLOCK_UTC_OFFSET_HOURS", "-5");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(config.polling.clock_utc_offset_hours, eq(-5));
}

#[test]
fn test_polling_durations() {
    let polling = PollingConfig::default();
    assert_eq!(polling.status_refresh(), Duration::from_secs(30));
    assert_eq!(polling.clock_tick(), Duration::from_millis(1000));
    assert_eq!(polling.message_dismiss(), Duration::from_secs(3));
}
