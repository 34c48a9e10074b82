mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod polling_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use polling_config::PollingConfig;
pub use session_config::SessionConfig;

const DEFAULT_CONFIG_DIRECTORY: &str = ".tk";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";
const DEFAULT_CSRF_HEADER_NAME: &str = "X-CSRFToken";
const DEFAULT_LOGIN_PATH: &str = "/";

const DEFAULT_STATUS_REFRESH_SECS: u64 = 30;
const MIN_STATUS_REFRESH_SECS: u64 = 1;
const MAX_STATUS_REFRESH_SECS: u64 = 3600;

const DEFAULT_CLOCK_TICK_MS: u64 = 1000;
const MIN_CLOCK_TICK_MS: u64 = 100;
const MAX_CLOCK_TICK_MS: u64 = 60_000;

const DEFAULT_MESSAGE_DISMISS_SECS: u64 = 3;
const MIN_MESSAGE_DISMISS_SECS: u64 = 1;
const MAX_MESSAGE_DISMISS_SECS: u64 = 60;

// Asia/Ho_Chi_Minh, no DST
const DEFAULT_CLOCK_UTC_OFFSET_HOURS: i32 = 7;
const MIN_CLOCK_UTC_OFFSET_HOURS: i32 = -12;
const MAX_CLOCK_UTC_OFFSET_HOURS: i32 = 14;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
