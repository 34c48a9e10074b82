use crate::session::{CSRF_PATH, CURRENT_EMPLOYEE_PATH, STATUS_PATH};

/// Endpoints whose job is to ask whether a session exists. A 401/403 from
/// them is an answer, not a failure.
pub const SESSION_PROBE_ENDPOINTS: [&str; 3] = [STATUS_PATH, CSRF_PATH, CURRENT_EMPLOYEE_PATH];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailureKind {
    /// Probe endpoint said "not authenticated"
    Expected,
    /// Any other endpoint refused the session
    Unexpected,
}

/// Classify a 401/403 by the path of the request that produced it
pub fn classify_auth_failure(request_path: &str) -> AuthFailureKind {
    let is_probe = SESSION_PROBE_ENDPOINTS
        .iter()
        .any(|probe| request_path.ends_with(probe));

    if is_probe {
        AuthFailureKind::Expected
    } else {
        AuthFailureKind::Unexpected
    }
}
