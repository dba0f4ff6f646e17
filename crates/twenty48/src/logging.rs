//! Tracing setup.
//!
//! Output goes to a file so log lines never land on the alternate screen.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to `path`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. If a subscriber
/// is already installed it stays in place and the call only truncates `path`.
pub fn init(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
    {
        debug!(error = %e, "Subscriber already installed, keeping it");
    }

    Ok(())
}
