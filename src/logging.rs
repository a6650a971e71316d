//! File logging.
//!
//! The game owns the terminal's alternate screen, so records never go to
//! stderr. They are written to `SNAKE_LOG_PATH` when it is set and dropped
//! otherwise.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::{AppConfig, SeedSource, SEED_VAR};

/// Install the global logger. Call once, before the terminal is taken over.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;

    Builder::new()
        .parse_filters(&config.log_filter)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;

    log::info!("logging to {path} (filter {:?})", config.log_filter);
    if let SeedSource::Rejected(raw) = &config.seed_source {
        log::warn!("ignoring unparseable {SEED_VAR}={raw:?}; using seed {}", config.seed);
    }
    Ok(())
}
