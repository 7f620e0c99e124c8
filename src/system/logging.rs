//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{MarksError, Result};

/// Where log lines go when `logging.file` is not configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// CLI commands own stdout, so logs go to stderr.
    Stderr,
    /// The TUI owns the terminal, so logs go to a file.
    File(PathBuf),
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, fallback: LogSink) -> Result<WorkerGuard> {
    let configured = config.file.as_deref().filter(|f| !f.trim().is_empty());
    let target = match (configured, fallback) {
        (Some(file), _) => Some(PathBuf::from(file)),
        (None, LogSink::File(path)) => Some(path),
        (None, LogSink::Stderr) => None,
    };

    let writer: Box<dyn std::io::Write + Send + Sync> = match &target {
        Some(path) => open_log_writer(path, config.enable_rotation, config.max_backups)?,
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| MarksError::config(format!("Invalid logging.level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target.is_none());

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| MarksError::config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

fn open_log_writer(
    path: &Path,
    enable_rotation: bool,
    max_backups: u32,
) -> Result<Box<dyn std::io::Write + Send + Sync>> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    if enable_rotation {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("marks.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| MarksError::config(format!("Failed to create rolling log appender: {}", e)))?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Box::new(file))
    }
}
