use crate::Settings;
use anyhow::{Context, Result, anyhow};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILENAME: &str = "minitune.log";

/// Route `tracing` output to `<log_dir>/minitune.log`. The terminal belongs
/// to the UI, so nothing is written to stdout or stderr.
///
/// `RUST_LOG` overrides the configured level. Keep the returned guard alive
/// for as long as logs should be flushed.
pub fn init_logging(settings: &Settings) -> Result<WorkerGuard> {
    let log_dir = settings.log_dir()?;
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILENAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("warn,minitune={}", settings.log_level)))
        .context("Invalid log level")?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Could not install logger: {e}"))?;

    Ok(guard)
}
