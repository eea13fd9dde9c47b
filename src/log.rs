// src/log.rs
//! File logging for both frontends.
//!
//! The `logf!`/`logd!`/`loge!` macros emit `tracing` events. `init` installs a
//! subscriber that appends them to `.store/debug.log` with an uptime prefix,
//! optionally mirrored to stderr (CLI).
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Safe to call more than once; only the first call wins.
/// Logging is best-effort: if the log file can't be opened we only log to stderr (when asked).
pub fn init(stderr: bool) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let file = fs::create_dir_all(STORE_DIR)
            .ok()
            .and_then(|_| OpenOptions::new().create(true).append(true).open(log_path()).ok());

        let file_layer = file.map(|f| {
            fmt::layer()
                .with_writer(Mutex::new(f))
                .with_ansi(false)
                .with_timer(fmt::time::uptime())
                .with_target(false)
        });
        let stderr_layer = stderr.then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(fmt::time::uptime())
                .with_target(false)
        });

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(stderr_layer)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
