pub mod auth;
pub mod check_action;
pub mod check_in_out_response;
pub mod current_status;
pub mod employee;
pub mod employee_records;
pub mod report_period;
pub mod system_stats;
pub mod time_record;
pub mod time_record_status;
