//! Log setup for the binary.
//!
//! The terminal belongs to the UI while it runs, so records go to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Route `log` records at or above `level` into `file`. Without a file,
/// logging stays disabled.
pub fn initialize(level: LevelFilter, file: Option<&Path>) -> Result<()> {
    let Some(path) = file else {
        return Ok(());
    };
    if level == LevelFilter::Off {
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(sink)))
        .try_init()
        .context("logger already initialised")?;

    log::info!("inqdesk {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
