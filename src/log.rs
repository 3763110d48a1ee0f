// src/log.rs
//
// Logging goes through `tracing`. `init` installs a fmt subscriber that
// appends to `.store/debug.log`; if the file can't be opened we log to
// stderr instead. Level comes from RUST_LOG (default "info").
//
// The short macros below are what the rest of the crate uses.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    INIT.get_or_init(|| {
        let path = Path::new(STORE_DIR).join(LOG_FILE);
        let file = fs::create_dir_all(STORE_DIR)
            .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

        let installed = match file {
            Ok(f) => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(f))
                .try_init()
                .is_ok(),
            Err(_) => false,
        };

        if !installed {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
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
