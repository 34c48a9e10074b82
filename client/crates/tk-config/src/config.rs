use crate::{
    ApiConfig, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    LoggingConfig, PollingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub polling: PollingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TK_CONFIG_DIR env var, else use ./.tk/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply TK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TK_CONFIG_DIR env var > ./.tk/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("TK_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.polling.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::config("logging.file cannot be empty when set"));
        }

        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.normalized_base_url(),
            self.api.timeout_secs
        );
        info!(
            "  session: cookie={}, header={}, login_path={}",
            self.session.csrf_cookie_name, self.session.csrf_header_name, self.session.login_path
        );
        info!(
            "  polling: status={}s, clock={}ms, dismiss={}s, utc{:+}",
            self.polling.status_refresh_secs,
            self.polling.clock_tick_ms,
            self.polling.message_dismiss_secs,
            self.polling.clock_utc_offset_hours
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("TK_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("TK_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_string("TK_CSRF_COOKIE_NAME", &mut self.session.csrf_cookie_name);
        Self::apply_env_string("TK_CSRF_HEADER_NAME", &mut self.session.csrf_header_name);
        Self::apply_env_string("TK_LOGIN_PATH", &mut self.session.login_path);

        // Polling
        Self::apply_env_parse(
            "TK_STATUS_REFRESH_SECS",
            &mut self.polling.status_refresh_secs,
        );
        Self::apply_env_parse("TK_CLOCK_TICK_MS", &mut self.polling.clock_tick_ms);
        Self::apply_env_parse(
            "TK_MESSAGE_DISMISS_SECS",
            &mut self.polling.message_dismiss_secs,
        );
        Self::apply_env_parse(
            "TK_CLOCK_UTC_OFFSET_HOURS",
            &mut self.polling.clock_utc_offset_hours,
        );

        // Logging
        Self::apply_env_parse("TK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TK_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
