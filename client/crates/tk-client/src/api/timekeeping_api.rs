use crate::{ApiClient, ClientResult, Download};

use tk_core::{
    CheckInOutResponse, CurrentStatus, Employee, EmployeeRecords, EmployeesRecordsResponse,
    ReportPeriod, SystemStats, TimeRecord,
};

/// Typed calls for attendance, reports and the admin dashboard. All
/// computation (hours, forgotten checkouts, aggregates) happens server-side.
#[derive(Clone)]
pub struct TimekeepingApi {
    client: ApiClient,
}

impl TimekeepingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // =========================================================================
    // Attendance
    // =========================================================================

    /// Today's status for the logged-in employee
    pub async fn current_status(&self) -> ClientResult<CurrentStatus> {
        self.client
            .get_json("/timerecords/current_status/")
            .await
    }

    /// Toggle: checks in when checked out, checks out when checked in
    pub async fn check_in_out(&self) -> ClientResult<CheckInOutResponse> {
        self.client
            .post_empty("/timerecords/checkin_checkout/")
            .await
    }

    /// The employee's own records for a month, newest first
    pub async fn monthly_records(&self, period: ReportPeriod) -> ClientResult<Vec<TimeRecord>> {
        self.client
            .get_json(&format!(
                "/timerecords/monthly_records/{}",
                period.query_string()
            ))
            .await
    }

    // =========================================================================
    // Reports
    // =========================================================================

    pub async fn monthly_excel(&self, period: ReportPeriod) -> ClientResult<Download> {
        let bytes = self
            .client
            .get_bytes(&format!(
                "/reports/monthly_excel/{}",
                period.query_string()
            ))
            .await?;

        Ok(Download::xlsx(
            format!("bao_cao_thang_{}_{}.xlsx", period.month, period.year),
            bytes,
        ))
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub async fn system_stats(&self) -> ClientResult<SystemStats> {
        self.client.get_json("/admin/system_stats/").await
    }

    pub async fn all_employees(&self) -> ClientResult<Vec<Employee>> {
        self.client.get_json("/admin/all_employees/").await
    }

    pub async fn all_employees_records(
        &self,
        period: ReportPeriod,
    ) -> ClientResult<Vec<EmployeeRecords>> {
        let response: EmployeesRecordsResponse = self
            .client
            .get_json(&format!(
                "/admin/all_employees_records/{}",
                period.query_string()
            ))
            .await?;
        Ok(response.employees_data)
    }

    pub async fn comprehensive_excel(&self, period: ReportPeriod) -> ClientResult<Download> {
        let bytes = self
            .client
            .get_bytes(&format!(
                "/admin/comprehensive_excel/{}",
                period.query_string()
            ))
            .await?;

        Ok(Download::xlsx(
            format!(
                "admin_comprehensive_report_{}_{}.xlsx",
                period.month, period.year
            ),
            bytes,
        ))
    }
}
