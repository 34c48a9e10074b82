use crate::{ClientResult, Download, InFlight, TimekeepingApi, ViewScope};

use tk_core::{CurrentUser, Employee, EmployeeRecords, ReportPeriod, SystemStats};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error, info};

#[derive(Debug, Clone, Default)]
pub struct AdminSnapshot {
    pub period: Option<ReportPeriod>,
    pub system_stats: Option<SystemStats>,
    pub employees: Vec<Employee>,
    pub employees_data: Vec<EmployeeRecords>,
    pub loading: bool,
    pub downloading: bool,
}

#[derive(Debug, Default)]
struct AdminState {
    period: Option<ReportPeriod>,
    system_stats: Option<SystemStats>,
    employees: Vec<Employee>,
    employees_data: Vec<EmployeeRecords>,
}

/// Organisation-wide statistics, employee list and the comprehensive export.
/// Only mounted for administrators; the server still enforces the permission.
pub struct AdminDashboard {
    api: TimekeepingApi,
    scope: ViewScope,
    state: Mutex<AdminState>,
    loading: Arc<AtomicBool>,
    downloading: Arc<AtomicBool>,
}

impl AdminDashboard {
    /// `None` unless `user` qualifies for the admin view
    pub fn mount(api: TimekeepingApi, user: Option<&CurrentUser>) -> Option<Self> {
        match user {
            Some(user) if user.is_admin() => Some(Self {
                api,
                scope: ViewScope::new("admin"),
                state: Mutex::new(AdminState::default()),
                loading: Arc::new(AtomicBool::new(false)),
                downloading: Arc::new(AtomicBool::new(false)),
            }),
            Some(user) => {
                debug!("{} is not an administrator", user.employee_id);
                None
            }
            None => None,
        }
    }

    /// Fetch stats, employees and per-employee records concurrently. Each
    /// failure is logged on its own and leaves that part unchanged.
    pub async fn load(&self, period: ReportPeriod) {
        let (stats, employees, records) = {
            let _loading = InFlight::mark(&self.loading);
            tokio::join!(
                self.api.system_stats(),
                self.api.all_employees(),
                self.api.all_employees_records(period),
            )
        };

        if !self.scope.is_mounted() {
            return;
        }

        let mut state = self.lock();
        state.period = Some(period);

        match stats {
            Ok(stats) => state.system_stats = Some(stats),
            Err(e) => error!("Error fetching system stats: {e}"),
        }
        match employees {
            Ok(employees) => state.employees = employees,
            Err(e) => error!("Error fetching all employees: {e}"),
        }
        match records {
            Ok(records) => state.employees_data = records,
            Err(e) => error!("Error fetching employees records for {period}: {e}"),
        }
    }

    /// Comprehensive workbook for `period`; one download at a time
    pub async fn download(&self, period: ReportPeriod) -> ClientResult<Download> {
        let _in_flight = InFlight::acquire(&self.downloading, "comprehensive report download")?;

        let download = self
            .api
            .comprehensive_excel(period)
            .await
            .inspect_err(|e| error!("Error downloading comprehensive report for {period}: {e}"))?;

        info!("Downloaded {} ({} bytes)", download.filename, download.len());
        Ok(download)
    }

    pub fn snapshot(&self) -> AdminSnapshot {
        let state = self.lock();
        AdminSnapshot {
            period: state.period,
            system_stats: state.system_stats.clone(),
            employees: state.employees.clone(),
            employees_data: state.employees_data.clone(),
            loading: self.loading.load(Ordering::Acquire),
            downloading: self.downloading.load(Ordering::Acquire),
        }
    }

    pub fn is_downloading(&self) -> bool {
        self.downloading.load(Ordering::Acquire)
    }

    pub fn unmount(self) {
        self.scope.unmount();
    }

    fn lock(&self) -> MutexGuard<'_, AdminState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
