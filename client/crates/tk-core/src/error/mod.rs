use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid time record status: {value} {location}")]
    InvalidRecordStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid report period: {year}-{month} {location}")]
    InvalidReportPeriod {
        year: i32,
        month: u32,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
