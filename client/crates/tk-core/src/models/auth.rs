use crate::Employee;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of the session-status probe
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub employee: Option<Employee>,
}

impl AuthStatus {
    /// The identity to adopt, only when the server reports a session
    pub fn into_user(self) -> Option<Employee> {
        if self.authenticated {
            self.employee
        } else {
            None
        }
    }
}
