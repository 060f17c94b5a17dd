//! Logging setup for the hosting plugin.
use crate::error::{Error, Result};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

const LOG_PREFIX: &str = "workbench-fs-bridge.log";
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Enable logging to stdout and a daily-rolling file in `log_dir`.
///
/// Call once from the hosting plugin. The returned guard flushes the file
/// writer; hold it for the life of the host.
pub fn enable(log_dir: impl AsRef<Path>) -> Result<WorkerGuard> {
    let file_logger = tracing_appender::rolling::daily(log_dir.as_ref(), LOG_PREFIX);
    let (file_logger, guard) = tracing_appender::non_blocking(file_logger);
    let file_logger = fmt::layer()
        .with_writer(file_logger)
        .with_timer(UtcTime::rfc_3339())
        .json()
        .with_filter(MAX_LOG_LEVEL);

    let console_logger = fmt::layer()
        .with_writer(io::stdout)
        .with_timer(UtcTime::rfc_3339())
        .pretty()
        .with_filter(MAX_LOG_LEVEL);

    let subscriber = Registry::default().with(console_logger).with(file_logger);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Logging(err.to_string()))?;

    Ok(guard)
}
