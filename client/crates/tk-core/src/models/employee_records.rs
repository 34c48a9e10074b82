use crate::Employee;

use serde::{Deserialize, Serialize};

/// Monthly aggregate for one employee, computed server-side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeStats {
    pub total_working_days: u32,
    pub total_working_hours: f64,
    pub days_forgot_checkout: u32,
    pub days_off: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeRecords {
    pub employee: Employee,
    pub stats: EmployeeStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeesRecordsResponse {
    pub employees_data: Vec<EmployeeRecords>,
}
