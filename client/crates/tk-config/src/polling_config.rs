use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CLOCK_TICK_MS, DEFAULT_CLOCK_UTC_OFFSET_HOURS,
    DEFAULT_MESSAGE_DISMISS_SECS, DEFAULT_STATUS_REFRESH_SECS, MAX_CLOCK_TICK_MS,
    MAX_CLOCK_UTC_OFFSET_HOURS, MAX_MESSAGE_DISMISS_SECS, MAX_STATUS_REFRESH_SECS,
    MIN_CLOCK_TICK_MS, MIN_CLOCK_UTC_OFFSET_HOURS, MIN_MESSAGE_DISMISS_SECS,
    MIN_STATUS_REFRESH_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Timers owned by the dashboard view
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Current-status refresh interval in seconds
    pub status_refresh_secs: u64,
    /// Clock display refresh interval in milliseconds
    pub clock_tick_ms: u64,
    /// How long a check-in/out message stays visible
    pub message_dismiss_secs: u64,
    /// UTC offset used by the clock display
    pub clock_utc_offset_hours: i32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            status_refresh_secs: DEFAULT_STATUS_REFRESH_SECS,
            clock_tick_ms: DEFAULT_CLOCK_TICK_MS,
            message_dismiss_secs: DEFAULT_MESSAGE_DISMISS_SECS,
            clock_utc_offset_hours: DEFAULT_CLOCK_UTC_OFFSET_HOURS,
        }
    }
}

impl PollingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.status_refresh_secs < MIN_STATUS_REFRESH_SECS
            || self.status_refresh_secs > MAX_STATUS_REFRESH_SECS
        {
            return Err(ConfigError::polling(format!(
                "polling.status_refresh_secs must be {}-{}, got {}",
                MIN_STATUS_REFRESH_SECS, MAX_STATUS_REFRESH_SECS, self.status_refresh_secs
            )));
        }

        if self.clock_tick_ms < MIN_CLOCK_TICK_MS || self.clock_tick_ms > MAX_CLOCK_TICK_MS {
            return Err(ConfigError::polling(format!(
                "polling.clock_tick_ms must be {}-{}, got {}",
                MIN_CLOCK_TICK_MS, MAX_CLOCK_TICK_MS, self.clock_tick_ms
            )));
        }

        if self.message_dismiss_secs < MIN_MESSAGE_DISMISS_SECS
            || self.message_dismiss_secs > MAX_MESSAGE_DISMISS_SECS
        {
            return Err(ConfigError::polling(format!(
                "polling.message_dismiss_secs must be {}-{}, got {}",
                MIN_MESSAGE_DISMISS_SECS, MAX_MESSAGE_DISMISS_SECS, self.message_dismiss_secs
            )));
        }

        if self.clock_utc_offset_hours < MIN_CLOCK_UTC_OFFSET_HOURS
            || self.clock_utc_offset_hours > MAX_CLOCK_UTC_OFFSET_HOURS
        {
            return Err(ConfigError::polling(format!(
                "polling.clock_utc_offset_hours must be {} to {}, got {}",
                MIN_CLOCK_UTC_OFFSET_HOURS, MAX_CLOCK_UTC_OFFSET_HOURS, self.clock_utc_offset_hours
            )));
        }

        Ok(())
    }

    pub fn status_refresh(&self) -> Duration {
        Duration::from_secs(self.status_refresh_secs)
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }

    pub fn message_dismiss(&self) -> Duration {
        Duration::from_secs(self.message_dismiss_secs)
    }
}
