use crate::{ClientResult, Download, InFlight, TimekeepingApi, ViewScope};

use tk_core::{ReportPeriod, TimeRecord};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, info};

#[derive(Debug, Clone, Default)]
pub struct ReportsSnapshot {
    pub period: Option<ReportPeriod>,
    pub records: Vec<TimeRecord>,
    pub loading: bool,
    pub downloading: bool,
}

#[derive(Debug, Default)]
struct ReportsState {
    period: Option<ReportPeriod>,
    records: Vec<TimeRecord>,
}

/// The employee's monthly records and their Excel export
pub struct ReportsView {
    api: TimekeepingApi,
    scope: ViewScope,
    state: Mutex<ReportsState>,
    loading: Arc<AtomicBool>,
    downloading: Arc<AtomicBool>,
}

impl ReportsView {
    pub fn mount(api: TimekeepingApi) -> Self {
        Self {
            api,
            scope: ViewScope::new("reports"),
            state: Mutex::new(ReportsState::default()),
            loading: Arc::new(AtomicBool::new(false)),
            downloading: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fetch records for `period`. The list is kept only if the view is
    /// still mounted when the response arrives.
    pub async fn load(&self, period: ReportPeriod) -> ClientResult<Vec<TimeRecord>> {
        let result = {
            let _loading = InFlight::mark(&self.loading);
            self.api.monthly_records(period).await
        };

        match result {
            Ok(records) => {
                if self.scope.is_mounted() {
                    let mut state = self.lock();
                    state.period = Some(period);
                    state.records = records.clone();
                }
                Ok(records)
            }
            Err(e) => {
                error!("Error fetching records for {period}: {e}");
                Err(e)
            }
        }
    }

    /// Monthly workbook for `period`; one download at a time
    pub async fn download(&self, period: ReportPeriod) -> ClientResult<Download> {
        let _in_flight = InFlight::acquire(&self.downloading, "report download")?;

        let download = self.api.monthly_excel(period).await.inspect_err(|e| {
            error!("Error downloading report for {period}: {e}");
        })?;

        info!("Downloaded {} ({} bytes)", download.filename, download.len());
        Ok(download)
    }

    pub fn snapshot(&self) -> ReportsSnapshot {
        let state = self.lock();
        ReportsSnapshot {
            period: state.period,
            records: state.records.clone(),
            loading: self.loading.load(Ordering::Acquire),
            downloading: self.downloading.load(Ordering::Acquire),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }

    pub fn unmount(self) {
        self.scope.unmount();
    }

    fn lock(&self) -> MutexGuard<'_, ReportsState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
