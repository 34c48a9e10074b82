use tk_client::ClientError;
use tk_config::ConfigError;
use tk_core::CoreError;

use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(transparent)]
    Client {
        #[from]
        source: ClientError,
    },

    #[error("Invalid input: {source}")]
    Input {
        #[from]
        source: CoreError,
    },

    #[error("Not logged in; pass --username and --password {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Login rejected for '{username}' {location}")]
    LoginRejected {
        username: String,
        location: ErrorLocation,
    },

    #[error("Administrator access required {location}")]
    Forbidden { location: ErrorLocation },

    #[error("Failed to write {}: {source} {location}", .path.display())]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn not_authenticated() -> Self {
        CliError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn login_rejected(username: &str) -> Self {
        CliError::LoginRejected {
            username: username.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden() -> Self {
        CliError::Forbidden {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        CliError::Io {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = StdResult<T, CliError>;
