use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize logging to stdout, filtered by `RUST_LOG` (default `info`).
///
/// Lines carry only the message and its fields, so progress notices read as
/// plain text.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
