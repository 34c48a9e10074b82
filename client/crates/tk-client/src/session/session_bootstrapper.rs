use crate::session::{CSRF_PATH, LOGIN_PATH, LOGOUT_PATH, STATUS_PATH};
use crate::{ApiClient, BootstrapState, ClientError, CurrentUserStore};

use tk_core::{AuthStatus, CurrentUser, LoginRequest, LoginResponse};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, info, warn};
use tokio::sync::watch;

/// Establishes on startup whether a session exists, and owns every
/// operation that changes it.
///
/// None of the operations return errors: transport and server failures are
/// logged and turned into `false` / `None`. `check_status` and `initialize`
/// fail closed to "no user".
#[derive(Clone)]
pub struct SessionBootstrapper {
    client: ApiClient,
    users: CurrentUserStore,
    state: Arc<watch::Sender<BootstrapState>>,
    started: Arc<AtomicBool>,
}

impl SessionBootstrapper {
    pub fn new(client: ApiClient, users: CurrentUserStore) -> Self {
        let (state, _rx) = watch::channel(BootstrapState::Loading);
        Self {
            client,
            users,
            state: Arc::new(state),
            started: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn users(&self) -> &CurrentUserStore {
        &self.users
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.users.get()
    }

    pub fn state(&self) -> BootstrapState {
        *self.state.borrow()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<BootstrapState> {
        self.state.subscribe()
    }

    /// Wait until the first session check has resolved
    pub async fn wait_ready(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives as long as `self`, so this cannot fail
        let _ = rx.wait_for(BootstrapState::is_ready).await;
    }

    /// Prime the CSRF cookie, then ask the server whether a session exists.
    ///
    /// The two calls are strictly sequential: the status probe is not sent
    /// until the priming call has resolved. If priming fails the probe is
    /// skipped. Either way the state ends `Ready`. Only the first call runs
    /// the sequence; later calls return the current state.
    pub async fn initialize(&self) -> BootstrapState {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Session already initialized ({})", self.state());
            return self.state();
        }

        match self.client.get(CSRF_PATH).await {
            Ok(()) => {
                self.check_status().await;
            }
            Err(e) => {
                error!("Session initialization failed while priming CSRF token: {e}");
            }
        }

        self.mark_ready();
        BootstrapState::Ready
    }

    /// Ask the server who is logged in and mirror the answer locally.
    pub async fn check_status(&self) -> Option<CurrentUser> {
        match self.client.get_json::<AuthStatus>(STATUS_PATH).await {
            Ok(status) => match status.into_user() {
                Some(user) => {
                    info!("Session active for {}", user.employee_id);
                    self.users.set(user.clone());
                    Some(user)
                }
                None => {
                    debug!("No active session");
                    self.users.clear();
                    None
                }
            },
            Err(ClientError::Unauthorized { status, .. }) => {
                debug!("No active session ({status})");
                self.users.clear();
                None
            }
            Err(e) => {
                error!("Session status check failed: {e}");
                self.users.clear();
                None
            }
        }
    }

    /// Returns whether the server accepted the credentials and named the
    /// employee. A success without an employee counts as a rejection. On
    /// rejection or error the current user is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        let body = LoginRequest { username, password };

        match self
            .client
            .post_json::<_, LoginResponse>(LOGIN_PATH, &body)
            .await
        {
            Ok(LoginResponse {
                success: true,
                employee: Some(employee),
                ..
            }) => {
                info!("Logged in as {}", employee.employee_id);
                self.users.set(employee);
                true
            }
            Ok(response) => {
                warn!(
                    "Login rejected: {}",
                    response.message.as_deref().unwrap_or("no employee in response")
                );
                false
            }
            Err(e) => {
                error!("Login error: {e}");
                false
            }
        }
    }

    /// Tell the server, then forget the user whatever the server said.
    pub async fn logout(&self) {
        if let Err(e) = self.client.post(LOGOUT_PATH).await {
            warn!("Logout request failed, clearing session locally: {e}");
        }

        if self.users.clear() {
            info!("Logged out");
        }
    }

    fn mark_ready(&self) {
        self.state.send_if_modified(|state| {
            if state.is_ready() {
                return false;
            }
            *state = BootstrapState::Ready;
            true
        });
    }
}
