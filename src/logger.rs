//! Logging setup
//!
//! Console output plus a daily rolling file in the data directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::Result;
use crate::helpers::{get_or_create_data_dir, is_development};

const LOG_FILE_PREFIX: &str = "arkem-storybook.log";

fn default_filter() -> EnvFilter {
    let level = if is_development() { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("arkem_ui={level}")))
}

/// Install the global subscriber. The returned guard flushes the file writer
/// and must be held for the lifetime of the process.
pub fn init() -> Result<WorkerGuard> {
    let log_dir = get_or_create_data_dir()?;
    let log_file = rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(log_file);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(default_filter());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_timer(LocalTime::rfc_3339())
        .with_file(true)
        .with_line_number(true)
        .with_filter(default_filter());

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(dir = %log_dir.display(), "Logging initialized");
    Ok(guard)
}
