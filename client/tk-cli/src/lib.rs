//! tk-cli library
//!
//! Exposes the command runner so the commands can be exercised in tests.

pub(crate) mod admin_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod runner;


pub use admin_commands::AdminCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use runner::Runner;
