//! Diagnostic logging.
//!
//! Report calculators emit `tracing` events; the binary installs a stderr
//! subscriber once. `RUST_LOG` overrides the configured level.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

pub fn init(level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::debug!(level, "logging initialized");
    Ok(())
}

/// Initialize logging for tests (captured by the test harness)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
