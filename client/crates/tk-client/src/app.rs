use crate::view::{ADMIN_PATH, REPORTS_PATH};
use crate::{
    AdminDashboard, ApiClient, AuthFailureRedirect, ClientResult, CsrfHeader, CurrentUserStore,
    Dashboard, Navigator, Pipeline, ReportsView, SessionBootstrapper, TimekeepingApi,
};

use tk_config::{Config, PollingConfig};

use std::sync::Arc;

use log::info;
use reqwest::cookie::Jar;

/// Everything a front end needs, wired once at startup: cookie jar, request
/// pipeline, API client, session bootstrapper and typed API.
#[derive(Clone)]
pub struct App {
    client: ApiClient,
    session: SessionBootstrapper,
    api: TimekeepingApi,
    navigator: Arc<dyn Navigator>,
    polling: PollingConfig,
    login_path: String,
}

impl App {
    pub fn new(config: &Config, navigator: Arc<dyn Navigator>) -> ClientResult<Self> {
        Self::with_pipeline(config, navigator, |_| {})
    }

    /// Like `new`, with a chance to append hooks after the built-in CSRF and
    /// auth-failure hooks.
    pub fn with_pipeline<F>(
        config: &Config,
        navigator: Arc<dyn Navigator>,
        extend: F,
    ) -> ClientResult<Self>
    where
        F: FnOnce(&mut Pipeline),
    {
        let cookies = Arc::new(Jar::default());
        let users = CurrentUserStore::new();

        let mut pipeline = Pipeline::new();
        pipeline
            .push_request_hook(CsrfHeader::new(
                cookies.clone(),
                &config.session.csrf_cookie_name,
                &config.session.csrf_header_name,
            )?)
            .push_response_hook(AuthFailureRedirect::new(
                navigator.clone(),
                users.clone(),
                &config.session.login_path,
            ));
        extend(&mut pipeline);

        let client = ApiClient::new(&config.api, cookies, pipeline)?;
        let session = SessionBootstrapper::new(client.clone(), users);
        let api = TimekeepingApi::new(client.clone());

        info!("Client ready for {}", client.base_url());

        Ok(Self {
            client,
            session,
            api,
            navigator,
            polling: config.polling.clone(),
            login_path: config.session.login_path.clone(),
        })
    }

    pub fn session(&self) -> &SessionBootstrapper {
        &self.session
    }

    pub fn users(&self) -> &CurrentUserStore {
        self.session.users()
    }

    pub fn api(&self) -> &TimekeepingApi {
        &self.api
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn polling(&self) -> &PollingConfig {
        &self.polling
    }

    /// The dashboard lives at the login path; it shows the login form when
    /// nobody is logged in.
    pub fn mount_dashboard(&self) -> Dashboard {
        self.navigator.navigate(&self.login_path);
        Dashboard::mount(
            self.api.clone(),
            self.session.current_user().as_ref(),
            &self.polling,
        )
    }

    pub fn mount_reports(&self) -> ReportsView {
        self.navigator.navigate(REPORTS_PATH);
        ReportsView::mount(self.api.clone())
    }

    pub fn mount_admin(&self) -> Option<AdminDashboard> {
        self.navigator.navigate(ADMIN_PATH);
        AdminDashboard::mount(self.api.clone(), self.session.current_user().as_ref())
    }
}
