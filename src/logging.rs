use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;
use tracing::Level;

use crate::config::Config;

/// Install the global tracing subscriber.
///
/// Stdout carries the launcher protocol, so logs go to `dailynote.log` in the
/// config directory, or to stderr when that file can't be opened.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false);

    let result = match open_log_file() {
        Ok(file) => builder.with_writer(Mutex::new(file)).try_init(),
        Err(e) => {
            eprintln!("Warning: logging to stderr: {:#}", e);
            builder.with_writer(std::io::stderr).try_init()
        }
    };

    if let Err(e) = result {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
}

/// Appends to the log file, creating it if needed
fn open_log_file() -> Result<File> {
    let log_path = Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))
}
