use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeRecordStatus {
    CheckedIn,
    #[default]
    CheckedOut,
    ForgotCheckout,
}

impl TimeRecordStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::ForgotCheckout => "FORGOT_CHECKOUT",
        }
    }
}

impl fmt::Display for TimeRecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRecordStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "FORGOT_CHECKOUT" => Ok(Self::ForgotCheckout),
            _ => Err(CoreError::InvalidRecordStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
