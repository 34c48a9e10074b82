pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use models::auth::{AuthStatus, LoginRequest, LoginResponse};
pub use models::check_action::CheckAction;
pub use models::check_in_out_response::CheckInOutResponse;
pub use models::current_status::CurrentStatus;
pub use models::employee::{CurrentUser, Employee};
pub use models::employee_records::{EmployeeRecords, EmployeeStats, EmployeesRecordsResponse};
pub use models::report_period::ReportPeriod;
pub use models::system_stats::SystemStats;
pub use models::time_record::TimeRecord;
pub use models::time_record_status::TimeRecordStatus;

/// Employee id of the built-in administrator account
pub const ADMIN_EMPLOYEE_ID: &str = "ADMIN001";
/// Department/position pair that also grants the admin view
pub const ADMIN_DEPARTMENT: &str = "HR";
pub const ADMIN_POSITION: &str = "System Administrator";
