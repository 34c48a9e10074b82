use crate::admin_commands::AdminCommands;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show who is logged in
    Session,

    /// Today's attendance status
    Status,

    /// Check in, or check out when already checked in
    Check,

    /// Your records for a month
    Records {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Download your monthly Excel report
    Report {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
        /// Output file (defaults to the server-suggested name)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Administrator operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },

    /// Live dashboard: clock and status until Ctrl-C
    Watch,
}
