use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.api.base_url.as_str(),
        eq(crate::DEFAULT_API_BASE_URL)
    );
    assert_that!(config.session.csrf_cookie_name.as_str(), eq("csrftoken"));
    assert_that!(config.session.csrf_header_name.as_str(), eq("X-CSRFToken"));
    assert_that!(config.session.login_path.as_str(), eq("/"));
    assert_that!(config.polling.status_refresh_secs, eq(30));
    assert_that!(config.polling.clock_tick_ms, eq(1000));
    assert_that!(config.polling.message_dismiss_secs, eq(3));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
              [api]
              base_url = "https://hr.example.com/api"
              timeout_secs = 10

              [polling]
              status_refresh_secs = 60
          "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://hr.example.com/api")
    );
    assert_that!(config.api.timeout_secs, eq(10));
    assert_that!(config.polling.status_refresh_secs, eq(60));
    // Untouched sections keep their defaults
    assert_that!(config.polling.clock_tick_ms, eq(1000));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[api]\ntimeout_secs = 10");
    let _timeout = EnvGuard::set("TK_API_TIMEOUT_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(45));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("TK_API_BASE_URL", "http://10.0.0.5:9000/api");
    let _cookie = EnvGuard::set("TK_CSRF_COOKIE_NAME", "xsrf");
    let _refresh = EnvGuard::set("TK_STATUS_REFRESH_SECS", "15");
    let _colored = EnvGuard::set("TK_LOG_COLORED", "false");
    let _file = EnvGuard::set("TK_LOG_FILE", "tk.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("http://10.0.0.5:9000/api")
    );
    assert_that!(config.session.csrf_cookie_name.as_str(), eq("xsrf"));
    assert_that!(config.polling.status_refresh_secs, eq(15));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("tk.log")));
}

#[test]
#[serial]
fn given_unparseable_numeric_env_when_load_then_value_unchanged() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _refresh = EnvGuard::set("TK_STATUS_REFRESH_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.polling.status_refresh_secs, eq(30));
}
