//! Logging Setup
//!
//! Log lines go to a daily rolling file in the data directory so the terminal
//! stays free for the browser itself. Without file logging only warnings and
//! errors reach stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::constants::LOG_FILE_PREFIX;
use crate::domain::config::LogConfig;
use crate::error::Result;

use super::fs::{get_or_create_data_dir, is_development};

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize tracing
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the program.
pub fn init_tracing(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    if !config.file {
        let level = if is_development() { "warn" } else { "error" };
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(level))
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_dir = get_or_create_data_dir()?;
    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.level))
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .with_ansi(false)
        .with_writer(writer)
        .init();

    tracing::info!(dir = ?log_dir, "File logging initialized");
    Ok(Some(guard))
}
