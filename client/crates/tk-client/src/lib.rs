//! Client core for the timekeeping service: authorized request pipeline,
//! session bootstrap, typed API and view controllers.

mod api;
mod api_client;
mod app;
mod error;
mod navigator;
mod pipeline;
mod session;
mod view;


pub use api::{Download, TimekeepingApi, XLSX_CONTENT_TYPE};
pub use api_client::ApiClient;
pub use app::App;
pub use error::{ClientError, ClientResult};
pub use navigator::{InMemoryNavigator, Navigator};
pub use pipeline::{
    AuthFailureKind, AuthFailureRedirect, CsrfHeader, Pipeline, RequestHook, ResponseHook,
    ResponseMeta, SESSION_PROBE_ENDPOINTS, classify_auth_failure,
};
pub use session::{
    BootstrapState, CSRF_PATH, CURRENT_EMPLOYEE_PATH, CurrentUserStore, LOGIN_PATH, LOGOUT_PATH,
    STATUS_PATH, SessionBootstrapper,
};
pub use view::{
    ADMIN_PATH, AdminDashboard, AdminSnapshot, CHECK_IN_OUT_ERROR_MESSAGE, CLOCK_FORMAT, Dashboard,
    DashboardSnapshot, FlashMessage, InFlight, MountGuard, REPORTS_PATH, ReportsSnapshot,
    ReportsView, ViewScope, format_clock,
};
