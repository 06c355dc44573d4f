//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<log_dir>/copilot.log`. The filter comes from `COPILOT_LOG`
//! (any `EnvFilter` directive), defaulting to `inbox_copilot=info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LOG_ENV;

pub const LOG_FILE: &str = "copilot.log";
const DEFAULT_FILTER: &str = "inbox_copilot=info";

/// Build the filter from `COPILOT_LOG`, falling back to the default.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `log_dir/copilot.log`.
///
/// Returns the log file path. Installing twice is not an error; the first
/// subscriber stays in place.
pub fn init(log_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(env_filter())
        .try_init();

    Ok(path)
}
