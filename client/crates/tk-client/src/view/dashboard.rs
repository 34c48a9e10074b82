use crate::{
    ClientResult, FlashMessage, InFlight, MountGuard, TimekeepingApi, ViewScope, format_clock,
};

use tk_config::PollingConfig;
use tk_core::{CheckInOutResponse, CurrentStatus, CurrentUser};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use log::{debug, error, info};

/// Shown in place of the server message when a check-in/out call fails
pub const CHECK_IN_OUT_ERROR_MESSAGE: &str = "An error occurred, please try again";

/// Point-in-time copy of what the dashboard displays
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub current_status: Option<CurrentStatus>,
    pub busy: bool,
    pub message: Option<String>,
    pub current_time: String,
}

#[derive(Debug, Default)]
struct DashboardState {
    current_status: Option<CurrentStatus>,
    message: FlashMessage,
    current_time: String,
}

type SharedState = Arc<Mutex<DashboardState>>;

/// Attendance dashboard: live clock, periodic status refresh and the
/// check-in/out toggle.
///
/// Timers belong to the view's [`ViewScope`] and stop when the dashboard is
/// unmounted or dropped. Results arriving after unmount are discarded.
pub struct Dashboard {
    api: TimekeepingApi,
    scope: ViewScope,
    state: SharedState,
    busy: Arc<AtomicBool>,
    admin_view: bool,
    message_dismiss: Duration,
}

impl Dashboard {
    /// Start the clock, and the status poll when someone is logged in.
    /// Must be called inside a Tokio runtime.
    pub fn mount(api: TimekeepingApi, user: Option<&CurrentUser>, polling: &PollingConfig) -> Self {
        let scope = ViewScope::new("dashboard");
        let state = SharedState::default();

        let utc_offset = polling.clock_utc_offset_hours;
        let clock_state = state.clone();
        scope.spawn_periodic(polling.clock_tick(), move || {
            let time = format_clock(Utc::now(), utc_offset);
            lock(&clock_state).current_time = time;
            async {}
        });

        if let Some(user) = user {
            debug!(
                "Polling status for {} every {:?}",
                user.employee_id,
                polling.status_refresh()
            );

            let poll_api = api.clone();
            let poll_state = state.clone();
            let guard = scope.guard();
            scope.spawn_periodic(polling.status_refresh(), move || {
                let api = poll_api.clone();
                let state = poll_state.clone();
                let guard = guard.clone();
                async move { fetch_status(&api, &state, &guard).await }
            });
        }

        Self {
            api,
            scope,
            state,
            busy: Arc::new(AtomicBool::new(false)),
            admin_view: user.is_some_and(CurrentUser::is_admin),
            message_dismiss: polling.message_dismiss(),
        }
    }

    /// Fetch today's status now, outside the regular poll
    pub async fn refresh_status(&self) {
        fetch_status(&self.api, &self.state, &self.scope.guard()).await;
    }

    /// Toggle check-in/out. Refused with `Busy` while a previous toggle is
    /// still running.
    pub async fn check_in_out(&self) -> ClientResult<CheckInOutResponse> {
        let _in_flight = InFlight::acquire(&self.busy, "check-in/out")?;

        match self.api.check_in_out().await {
            Ok(response) => {
                if response.success {
                    info!("Check-in/out: {:?}", response.action);
                    if let Some(text) = response.message.clone() {
                        self.flash(text);
                    }
                    self.refresh_status().await;
                }
                Ok(response)
            }
            Err(e) => {
                error!("Check-in/out failed: {e}");
                self.flash(CHECK_IN_OUT_ERROR_MESSAGE);
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let state = lock(&self.state);
        DashboardSnapshot {
            current_status: state.current_status.clone(),
            busy: self.is_busy(),
            message: state.message.text().map(String::from),
            current_time: state.current_time.clone(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Whether the logged-in user gets the administrator variant
    pub fn is_admin_view(&self) -> bool {
        self.admin_view
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }

    pub fn unmount(self) {
        self.scope.unmount();
    }

    /// Show `text` and schedule its dismissal
    fn flash<S: Into<String>>(&self, text: S) {
        if !self.scope.is_mounted() {
            return;
        }

        let generation = lock(&self.state).message.show(text);
        let state = self.state.clone();
        self.scope.spawn_after(self.message_dismiss, move || {
            lock(&state).message.dismiss(generation);
        });
    }
}

async fn fetch_status(api: &TimekeepingApi, state: &SharedState, guard: &MountGuard) {
    match api.current_status().await {
        Ok(status) => {
            if guard.is_mounted() {
                lock(state).current_status = Some(status);
            }
        }
        Err(e) => error!("Error fetching status: {e}"),
    }
}

fn lock(state: &SharedState) -> MutexGuard<'_, DashboardState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
