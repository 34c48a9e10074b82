mod bootstrap_state;
mod current_user_store;
mod session_bootstrapper;

pub use bootstrap_state::BootstrapState;
pub use current_user_store::CurrentUserStore;
pub use session_bootstrapper::SessionBootstrapper;

/// Sets the CSRF cookie; response body is irrelevant
pub const CSRF_PATH: &str = "/auth/csrf/";
/// Session-status probe: `{authenticated, employee}`
pub const STATUS_PATH: &str = "/auth/status/";
/// Alternative "who am I" probe returning the employee directly. Not called
/// by the bootstrapper, still treated as a probe by the pipeline.
pub const CURRENT_EMPLOYEE_PATH: &str = "/employees/current/";
pub const LOGIN_PATH: &str = "/auth/login/";
pub const LOGOUT_PATH: &str = "/auth/logout/";
