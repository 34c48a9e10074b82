use crate::{
    AuthFailureKind, CurrentUserStore, Navigator, ResponseHook, ResponseMeta,
    classify_auth_failure,
};

use std::sync::Arc;

use log::{debug, warn};

/// Sends the visitor back to the login view when a non-probe endpoint
/// refuses the session.
///
/// Probe endpoints are left alone: a logged-out visitor is expected to get
/// 401/403 there, and redirecting would loop. Any other rejection clears the
/// current user; only the redirect is skipped when the login view is already
/// showing.
pub struct AuthFailureRedirect {
    navigator: Arc<dyn Navigator>,
    users: CurrentUserStore,
    login_path: String,
}

impl AuthFailureRedirect {
    pub fn new(navigator: Arc<dyn Navigator>, users: CurrentUserStore, login_path: &str) -> Self {
        Self {
            navigator,
            users,
            login_path: login_path.to_string(),
        }
    }
}

impl ResponseHook for AuthFailureRedirect {
    fn name(&self) -> &'static str {
        "auth_failure_redirect"
    }

    fn on_response(&self, response: &ResponseMeta) {
        if !response.is_auth_failure() {
            return;
        }

        let path = response.url.path();
        if classify_auth_failure(path) == AuthFailureKind::Expected {
            debug!("{} {} -> {}: no session", response.method, path, response.status);
            return;
        }

        // The server no longer recognizes the session
        self.users.clear();

        if self.navigator.current_path() == self.login_path {
            debug!(
                "{} {} -> {} while on the login view, user cleared without redirect",
                response.method, path, response.status
            );
            return;
        }

        warn!(
            "{} {} -> {}, session rejected; redirecting to {}",
            response.method, path, response.status, self.login_path
        );
        self.navigator.redirect(&self.login_path);
    }
}
