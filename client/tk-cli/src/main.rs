//! tk - timekeeping command-line client
//!
//! # Examples
//!
//! ```bash
//! # Who am I?
//! tk session --username e1 --password secret
//!
//! # Check in (or out)
//! TK_USERNAME=e1 TK_PASSWORD=secret tk check --pretty
//!
//! # March report
//! tk report --year 2024 --month 3 --output march.xlsx
//! ```

use tk_cli::{Cli, CliResult, Commands, Runner, logger};
use tk_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.api_url.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let runner = match Runner::new(&config, cli.credentials()) {
        Ok(runner) => runner,
        Err(e) => {
            error!("Failed to create client: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pretty = cli.pretty;
    let result = match cli.command {
        Commands::Watch => {
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!("Failed to listen for Ctrl-C: {e}");
                }
                info!("Interrupted");
            };
            runner
                .watch(shutdown, |update| {
                    if let Err(e) = print_json(&update, pretty) {
                        error!("{e}");
                    }
                })
                .await
        }
        command => runner.run(command).await,
    };

    match result {
        Ok(value) => match print_json(&value, pretty) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error serializing response: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration, applying the --api-url override
fn load_config(api_url: Option<&str>) -> CliResult<Config> {
    let mut config = Config::load()?;
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}

fn print_json(value: &Value, pretty: bool) -> Result<(), serde_json::Error> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}
