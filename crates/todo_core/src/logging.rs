//! Log level policy shared by every host.
//!
//! The core only emits records through the `log` facade, as `event=...
//! module=... status=...` key-value messages; installing a logger is the
//! host's job.

use crate::error::AppError;
use log::LevelFilter;

pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn parse_level(raw: &str) -> Result<LevelFilter, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default_level()),
        "off" | "none" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(AppError::invalid_input(format!(
            "unsupported log level `{other}`"
        ))),
    }
}

/// Like [`parse_level`], but an unknown value falls back to the default.
pub fn level_or_default(raw: &str) -> LevelFilter {
    parse_level(raw).unwrap_or_else(|_| default_level())
}
