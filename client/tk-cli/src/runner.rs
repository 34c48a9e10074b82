use crate::{AdminCommands, CliError, CliResult, Commands};

use tk_client::{App, Download, InMemoryNavigator, Navigator};
use tk_config::Config;
use tk_core::ReportPeriod;

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::{Value, json};
use tokio::time::{MissedTickBehavior, interval};

/// Executes one CLI command against the API.
///
/// Each run bootstraps the session first. When no session exists and
/// credentials were given, it logs in for the duration of the command and
/// logs out again afterwards, whatever the command's outcome.
pub struct Runner {
    app: App,
    navigator: Arc<InMemoryNavigator>,
    credentials: Option<(String, String)>,
}

impl Runner {
    pub fn new(config: &Config, credentials: Option<(String, String)>) -> CliResult<Self> {
        let navigator = Arc::new(InMemoryNavigator::new(&config.session.login_path));
        let app = App::new(config, navigator.clone() as Arc<dyn Navigator>)?;

        Ok(Self {
            app,
            navigator,
            credentials,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Full redirects triggered by rejected sessions during this run
    pub fn redirects(&self) -> Vec<String> {
        self.navigator.redirects()
    }

    /// Run a one-shot command and return its JSON result
    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        self.with_session(self.execute(command)).await
    }

    /// Live dashboard: emits a snapshot on every status refresh until
    /// `shutdown` resolves.
    pub async fn watch<S, F>(&self, shutdown: S, mut emit: F) -> CliResult<Value>
    where
        S: Future<Output = ()>,
        F: FnMut(Value),
    {
        self.with_session(async {
            self.require_user()?;

            let dashboard = self.app.mount_dashboard();
            let mut ticker = interval(self.app.polling().status_refresh());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tokio::pin!(shutdown);

            let mut emitted = 0u64;
            loop {
                tokio::select! {
                    _ = &mut shutdown => break,
                    _ = ticker.tick() => {
                        let snapshot = dashboard.snapshot();
                        emit(json!({
                            "time": snapshot.current_time,
                            "status": snapshot.current_status,
                            "message": snapshot.message,
                            "busy": snapshot.busy,
                        }));
                        emitted += 1;
                    }
                }
            }

            dashboard.unmount();
            info!("Watch stopped after {emitted} updates");
            Ok(json!({ "updates": emitted }))
        })
        .await
    }

    async fn with_session<T, Fut>(&self, work: Fut) -> CliResult<T>
    where
        Fut: Future<Output = CliResult<T>>,
    {
        let session = self.app.session();
        session.initialize().await;

        let mut logged_in_here = false;
        if session.current_user().is_none()
            && let Some((username, password)) = &self.credentials
        {
            if !session.login(username, password).await {
                return Err(CliError::login_rejected(username));
            }
            logged_in_here = true;
        }

        let result = work.await;

        if logged_in_here {
            debug!("Ending session opened for this command");
            session.logout().await;
        }

        result
    }

    async fn execute(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Session => Ok(self.session_json()),
            Commands::Status => {
                self.require_user()?;
                Ok(to_json(&self.app.api().current_status().await?))
            }
            Commands::Check => {
                self.require_user()?;
                let dashboard = self.app.mount_dashboard();
                let result = dashboard.check_in_out().await;
                dashboard.unmount();
                Ok(to_json(&result?))
            }
            Commands::Records { year, month } => {
                self.require_user()?;
                let period = ReportPeriod::resolve(year, month)?;
                let reports = self.app.mount_reports();
                let records = reports.load(period).await;
                reports.unmount();
                Ok(to_json(&records?))
            }
            Commands::Report {
                year,
                month,
                output,
            } => {
                self.require_user()?;
                let period = ReportPeriod::resolve(year, month)?;
                let reports = self.app.mount_reports();
                let download = reports.download(period).await;
                reports.unmount();
                save(download?, output).await
            }
            Commands::Admin { action } => self.execute_admin(action).await,
            Commands::Watch => Err(tk_client::ClientError::invalid_input(
                "watch runs until interrupted; use Runner::watch",
            )
            .into()),
        }
    }

    async fn execute_admin(&self, action: AdminCommands) -> CliResult<Value> {
        self.require_user()?;
        let admin = self.app.mount_admin().ok_or_else(CliError::forbidden)?;
        let api = self.app.api();

        let result = match action {
            AdminCommands::Stats => api.system_stats().await.map(|v| to_json(&v)),
            AdminCommands::Employees => api.all_employees().await.map(|v| to_json(&v)),
            AdminCommands::Records { year, month } => {
                let period = ReportPeriod::resolve(year, month)?;
                api.all_employees_records(period).await.map(|v| to_json(&v))
            }
            AdminCommands::Report {
                year,
                month,
                output,
            } => {
                let period = ReportPeriod::resolve(year, month)?;
                let download = admin.download(period).await;
                admin.unmount();
                return save(download?, output).await;
            }
        };

        admin.unmount();
        Ok(result?)
    }

    fn require_user(&self) -> CliResult<()> {
        if self.app.users().is_authenticated() {
            Ok(())
        } else {
            Err(CliError::not_authenticated())
        }
    }

    fn session_json(&self) -> Value {
        let user = self.app.session().current_user();
        json!({
            "state": self.app.session().state().to_string(),
            "authenticated": user.is_some(),
            "is_admin": user.as_ref().is_some_and(|u| u.is_admin()),
            "employee": user,
        })
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        warn!("Could not serialize result: {e}");
        Value::Null
    })
}

async fn save(download: Download, output: Option<PathBuf>) -> CliResult<Value> {
    let path = output.unwrap_or_else(|| PathBuf::from(&download.filename));

    tokio::fs::write(&path, &download.bytes)
        .await
        .map_err(|e| CliError::io(path.clone(), e))?;

    info!("Saved {} ({} bytes)", path.display(), download.len());
    Ok(json!({
        "file": path.display().to_string(),
        "bytes": download.len(),
        "content_type": download.content_type,
    }))
}
