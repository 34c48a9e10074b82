use crate::TimeRecordStatus;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One employee-day of attendance, as computed by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeRecord {
    pub id: String,
    pub date: NaiveDate,
    pub check_in_time: Option<DateTime<FixedOffset>>,
    pub check_out_time: Option<DateTime<FixedOffset>>,
    pub status: TimeRecordStatus,
    #[serde(default)]
    pub working_hours: f64,
    #[serde(default)]
    pub forgot_checkout: bool,

    // Denormalized employee fields
    #[serde(default)]
    pub employee: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,

    // Audit
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl TimeRecord {
    /// Checked in with no check-out yet
    pub fn is_open(&self) -> bool {
        self.check_in_time.is_some() && self.check_out_time.is_none()
    }
}
