use crate::{TimeRecord, TimeRecordStatus};

use serde::{Deserialize, Serialize};

/// Today's attendance state for the current employee
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentStatus {
    pub status: TimeRecordStatus,
    pub record: Option<TimeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CurrentStatus {
    pub fn is_checked_in(&self) -> bool {
        self.status == TimeRecordStatus::CheckedIn
    }
}
