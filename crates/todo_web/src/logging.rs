//! Browser console logging behind the `log` facade.
//!
//! # Invariants
//! - The console logger is installed at most once per page.
//! - A second init only adjusts the max level.

use log::{Level, LevelFilter, info};
use once_cell::sync::OnceCell;
use todo_core::error::AppError;

static INSTALLED: OnceCell<()> = OnceCell::new();

pub fn init_logging(level: LevelFilter) -> Result<(), AppError> {
    INSTALLED.get_or_try_init(|| {
        console_log::init_with_level(Level::Trace)
            .map_err(|err| AppError::host(format!("failed to install logger: {err}")))
    })?;
    log::set_max_level(level);
    info!(
        "event=app_start module=web status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init_logging;
    use log::LevelFilter;

    #[test]
    fn second_init_only_adjusts_the_level() {
        init_logging(LevelFilter::Off).unwrap();
        init_logging(LevelFilter::Off).unwrap();

        assert_eq!(log::max_level(), LevelFilter::Off);
    }
}
