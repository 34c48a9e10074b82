use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemStats {
    pub total_employees: u32,
    pub checked_in_today: u32,
    pub checked_out_today: u32,
    pub total_working_hours_this_month: f64,
    pub forgotten_checkouts_this_month: u32,
    pub month_year: String,
}
