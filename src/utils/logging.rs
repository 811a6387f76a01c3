//! Process-wide logger bootstrap.
//!
//! Library code only talks to the `log` facade; this module wires the
//! `flexi_logger` backend to stderr once per process.

use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Starts the logger with `level` unless `RUST_LOG` overrides it.
///
/// Calling it again after a successful start is a no-op.
pub fn init_logging(level: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let level = normalize_level(level)?;
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|e| format!("invalid log specification `{}`: {}", level, e))?
        .log_to_stderr()
        .start()
        .map_err(|e| format!("failed to start logger: {}", e))?;

    let _ = LOGGER.set(handle);
    log::info!("logging initialized at level {}", level);
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    let lowered = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|candidate| **candidate == lowered)
        .copied()
        .ok_or_else(|| format!("unsupported log level `{}`", level))
}
