//! Structured logging with tracing
//!
//! Configures the global subscriber: human-readable or JSON lines on stderr,
//! plus an optional daily-rotated log file.

use cube_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;
use tracing::{Level, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `DATACUBE_LOG` overrides the configured level with a full filter
/// directive. Fails if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = match EnvFilter::try_from_env(LOG_FILTER_ENV) {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE_STEM)),
        )
    });

    // Layer types differ per format, so each combination is built separately
    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stderr).with(file).try_init()
        } else {
            registry.with(stderr).try_init()
        }
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stderr).with(file).try_init()
        } else {
            registry.with(stderr).try_init()
        }
    };
    installed.config_context("Failed to install tracing subscriber")?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Filter that enables every target at `level` and above
///
/// Accepts the same spellings as [`parse_log_level`], `warning` included.
pub fn level_filter(level: &str) -> Result<EnvFilter> {
    let level = parse_log_level(level)?;
    Ok(EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy(""))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
