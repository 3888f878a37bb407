//! Tracing setup
//!
//! The CLI logs to stderr so stdout stays clean for command output. The TUI
//! owns the terminal, so its logs go to `splitify.log` in the data directory.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::paths::SplitifyPaths;
use crate::error::{SplitifyError, SplitifyResult};

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Log to stderr for one-shot CLI commands
pub fn init_cli(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to the log file while the dashboard is on screen
pub fn init_tui(paths: &SplitifyPaths, default_level: &str) -> SplitifyResult<()> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            SplitifyError::Io(format!(
                "Failed to open log file {}: {}",
                log_path.display(),
                e
            ))
        })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
