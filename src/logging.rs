use crate::persistence::log_file;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "coursework=debug,warn"
    } else {
        "coursework=info,warn"
    }
}

/// Log to `coursework.log` in the data directory. The terminal belongs to the
/// UI, so nothing is written to stdout or stderr. `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing(data_dir: &Path, verbose: bool) -> Result<()> {
    let path = log_file(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
