use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;

use chrono::{Datelike, Local};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MIN_REPORT_YEAR: i32 = 2000;
pub const MAX_REPORT_YEAR: i32 = 2100;

/// Calendar month selected for a report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportPeriod {
    #[track_caller]
    pub fn new(year: i32, month: u32) -> CoreResult<Self> {
        if !(1..=12).contains(&month) || !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
            return Err(CoreError::InvalidReportPeriod {
                year,
                month,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { year, month })
    }

    /// The current month in local time
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Resolve optional year/month arguments against the current month
    #[track_caller]
    pub fn resolve(year: Option<i32>, month: Option<u32>) -> CoreResult<Self> {
        let current = Self::current();
        Self::new(year.unwrap_or(current.year), month.unwrap_or(current.month))
    }

    pub fn query_string(&self) -> String {
        format!("?year={}&month={}", self.year, self.month)
    }
}

impl Default for ReportPeriod {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
