mod admin_dashboard;
mod clock;
mod dashboard;
mod flash_message;
mod in_flight;
mod mount_guard;
mod reports_view;
mod view_scope;

pub use admin_dashboard::{AdminDashboard, AdminSnapshot};
pub use clock::{CLOCK_FORMAT, format_clock};
pub use dashboard::{CHECK_IN_OUT_ERROR_MESSAGE, Dashboard, DashboardSnapshot};
pub use flash_message::FlashMessage;
pub use in_flight::InFlight;
pub use mount_guard::MountGuard;
pub use reports_view::{ReportsSnapshot, ReportsView};
pub use view_scope::ViewScope;

pub const REPORTS_PATH: &str = "/reports";
pub const ADMIN_PATH: &str = "/admin";
