//! Logging configuration using tracing
//!
//! The terminal belongs to the TUI while it runs, so logs go to a daily
//! rolling file instead of stdout or stderr.

use anyhow::Result;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "PIZZA_TUI_LOG";

const LOG_FILE_PREFIX: &str = "pizza-tui.log";
const DEFAULT_FILTER: &str = "pizza_tui=info";

/// Initialize the logging subsystem
///
/// Logs are written under the platform data dir, e.g.
/// `~/.local/share/pizza-tui/logs/` on Linux.
///
/// ```bash
/// PIZZA_TUI_LOG=debug pizza-tui
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender(&log_dir, Rotation::DAILY))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("pizza-tui starting, logging to {}", log_dir.display());

    Ok(log_dir)
}

/// Directory holding the log files
pub fn log_directory() -> PathBuf {
    ProjectDirs::from("dev", "pizza", "pizza-tui")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
}

fn file_appender(dir: &Path, rotation: Rotation) -> RollingFileAppender {
    RollingFileAppender::new(rotation, dir, LOG_FILE_PREFIX)
}
