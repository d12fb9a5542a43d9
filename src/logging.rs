//! Log setup.
//!
//! The terminal is the UI, so tracing output goes to a file instead of
//! stdout. Logging is off unless `FOLIO_LOG` is set to a tracing filter
//! expression such as `folio=debug`.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub fn init() -> Result<()> {
    let Ok(spec) = std::env::var("FOLIO_LOG") else {
        return Ok(());
    };
    let filter = spec
        .parse::<EnvFilter>()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let path = log_path().context("could not determine the log directory")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("could not open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");
    Ok(())
}

fn log_path() -> Option<PathBuf> {
    Some(dirs::data_dir()?.join("folio").join("folio.log"))
}
