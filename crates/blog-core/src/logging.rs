//! File logging setup.
//!
//! Logs go to `<BLOG_HOME>/logs/blog.log` so stdout stays reserved for
//! command output. `BLOG_LOG` overrides the configured filter.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

pub const LOG_ENV: &str = "BLOG_LOG";
pub const LOG_FILE: &str = "blog.log";

/// Installs the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(default_level: &str) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), default_level)
}

pub fn init_in(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
