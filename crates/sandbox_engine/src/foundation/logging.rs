//! Logger setup
//!
//! Everything logs through the `log` facade. Binaries call [`init`] once at
//! startup; tests call [`init_for_tests`] so output is captured per test.

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Install the logger, defaulting to `info` when `RUST_LOG` is unset
pub fn init() {
    init_with_default(LevelFilter::Info);
}

/// Install the logger with a fallback level; `RUST_LOG` still wins when set
pub fn init_with_default(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if builder.try_init().is_err() {
        log::warn!("Logger already installed");
    }
}

/// Install a test-capturing logger
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
