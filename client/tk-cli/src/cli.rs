use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tk")]
#[command(about = "Timekeeping client: check in/out, reports and admin exports")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root, e.g. http://localhost:8000/api (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Username to log in with when no session exists
    #[arg(long, global = true, env = "TK_USERNAME")]
    pub username: Option<String>,

    /// Password for --username
    #[arg(long, global = true, env = "TK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    /// Username and password, only when both are given
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.clone(), password.clone())),
            _ => None,
        }
    }
}
