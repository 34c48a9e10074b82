mod auth;
mod employee;
mod report_period;
mod time_record;
mod time_record_status;
