//! Process-wide log sink setup
//!
//! The comparison core only ever appends to the `tracing` facade; this
//! module is the one place the subscriber is configured. Two layers
//! mirror the classic dual-handler setup: informational diagnostics go
//! to stderr, and the full debug stream (including every printed diff
//! block) is appended to `validation.log` in the chosen directory.
//!
//! Called once by the binary before any comparison runs; the library
//! never reconfigures the sink.

use anyhow::Context;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

pub const LOG_FILE_NAME: &str = "validation.log";

pub fn init(base_dir: &Path) -> anyhow::Result<()> {
    let log_path = base_dir.join(LOG_FILE_NAME);
    let log_file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::INFO);
    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("log sink was already initialized")?;

    Ok(())
}
