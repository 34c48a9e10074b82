use crate::{ADMIN_DEPARTMENT, ADMIN_EMPLOYEE_ID, ADMIN_POSITION};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    /// Human-readable identifier, e.g. "E1" or "ADMIN001"
    pub employee_id: String,
    pub full_name: String,
    pub department: String,
    pub position: String,

    /// Only present on admin listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Identity of the authenticated visitor
pub type CurrentUser = Employee;

impl Employee {
    /// Whether the admin dashboard should be offered. The server enforces the
    /// actual permission on every admin endpoint.
    pub fn is_admin(&self) -> bool {
        self.employee_id == ADMIN_EMPLOYEE_ID
            || (self.department == ADMIN_DEPARTMENT && self.position == ADMIN_POSITION)
    }
}
