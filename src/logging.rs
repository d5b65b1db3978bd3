// File: ./src/logging.rs
use anyhow::{Context, Result};
use env_logger::{Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Routes `log` output to `path`. The terminal is in raw mode while the UI
/// runs, so nothing may be written to stderr. `RUST_LOG` wins over `level`.
pub fn init_file_logger(path: &Path, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialised")
}
