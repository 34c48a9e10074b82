use crate::{CliError, CliResult};

use tk_config::LoggingConfig;

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Install the `tk` logger.
///
/// stdout is reserved for command results, so log lines never go there:
/// they land in `config.file` (appended) when one is configured, otherwise
/// on stderr. Level colors are used on stderr only.
#[track_caller]
pub fn initialize(config: &LoggingConfig) -> CliResult<()> {
    let level_filter = *config.level;
    let log_file = config.file.as_deref().map(Path::new);

    let colors = (log_file.is_none() && config.colored).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let dispatch = Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        });

    let dispatch = match log_file {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    CliError::logger(format!(
                        "Failed to open log file {}: {e}",
                        log_path.display()
                    ))
                })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    info!(
        "Logger initialized: level={level_filter:?}, sink={}",
        log_file.map_or_else(|| "stderr".to_string(), |p| p.display().to_string())
    );

    Ok(())
}
