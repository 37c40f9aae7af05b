//! Diagnostic logging.
//!
//! The compose UI owns the terminal, so diagnostics go to a file and only when
//! one is requested with `--log`. Without it no subscriber is installed and the
//! `tracing` macros are no-ops.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. `RUST_LOG` overrides the default `info`
/// level.
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| -> Box<dyn Error> { e })?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
