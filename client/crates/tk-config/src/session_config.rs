use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CSRF_COOKIE_NAME, DEFAULT_CSRF_HEADER_NAME,
    DEFAULT_LOGIN_PATH,
};

use serde::Deserialize;

/// CSRF cookie contract and the location of the unauthenticated view
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cookie set by the server on the CSRF priming call
    pub csrf_cookie_name: String,
    /// Request header that echoes the cookie value
    pub csrf_header_name: String,
    /// Root location rendering the login view; redirect target on unexpected 401/403
    pub login_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            csrf_cookie_name: String::from(DEFAULT_CSRF_COOKIE_NAME),
            csrf_header_name: String::from(DEFAULT_CSRF_HEADER_NAME),
            login_path: String::from(DEFAULT_LOGIN_PATH),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.csrf_cookie_name.trim().is_empty() {
            return Err(ConfigError::session("session.csrf_cookie_name cannot be empty"));
        }

        let header_ok = !self.csrf_header_name.is_empty()
            && self
                .csrf_header_name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !header_ok {
            return Err(ConfigError::session(format!(
                "session.csrf_header_name is not a valid header name: '{}'",
                self.csrf_header_name
            )));
        }

        if !self.login_path.starts_with('/') {
            return Err(ConfigError::session(format!(
                "session.login_path must start with '/', got '{}'",
                self.login_path
            )));
        }

        Ok(())
    }
}
