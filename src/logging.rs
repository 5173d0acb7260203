use chrono::Utc;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

use crate::app_config::RestLogConfig;
use crate::error::ConfigError;

pub const DEFAULT_LOG_FILE: &str = "rest.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

static INIT_LOGGER: Once = Once::new();

/// Parses a level name. Accepts the usual `log` names plus `warning` and
/// `critical`, case-insensitively.
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" | "critical" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        _ => Err(ConfigError::InvalidLogLevel(level.to_string())),
    }
}

/// Resolves the log file and level from the optional `restlog` section.
pub fn resolve(cfg: Option<&RestLogConfig>) -> Result<(PathBuf, LevelFilter), ConfigError> {
    let filename = cfg
        .and_then(|c| c.filename.as_deref())
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_LOG_FILE);

    let level = match cfg.and_then(|c| c.level.as_deref()) {
        Some(level) if !level.is_empty() => parse_level(level)?,
        _ => DEFAULT_LOG_LEVEL,
    };

    Ok((PathBuf::from(filename), level))
}

/// Installs a file logger tagged with `name`.
///
/// Only the first call that opens its file installs anything; later calls, or
/// calls made after the host application set up its own logger, leave it
/// alone. A file that cannot be opened is an error and leaves the next call
/// free to install.
pub fn get_logger(name: &str, filename: &Path, level: LevelFilter) -> Result<(), ConfigError> {
    if INIT_LOGGER.is_completed() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(filename)
        .map_err(|source| ConfigError::LogFile {
            path: filename.to_path_buf(),
            source,
        })?;

    INIT_LOGGER.call_once(|| {
        let name = name.to_string();
        let installed = env_logger::Builder::new()
            .filter_level(level)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format(move |buf, record| {
                writeln!(
                    buf,
                    "{} : {} : {} : {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    name,
                    record.level(),
                    record.args()
                )
            })
            .try_init();

        if installed.is_err() {
            log::debug!("logger already installed, keeping it");
        }
    });

    Ok(())
}
