use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum AdminCommands {
    /// Organisation-wide statistics for the current month
    Stats,

    /// List all employees
    Employees,

    /// Per-employee monthly statistics
    Records {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },

    /// Download the comprehensive Excel report
    Report {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
