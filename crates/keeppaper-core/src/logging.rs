//! Logging init: file under XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,keeppaper=debug,keeppaper_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Append structured logs to `~/.local/state/keeppaper/keeppaper.log`.
///
/// Logs never go to the working directory, which holds the conversion
/// outputs. Returns Err when the log file cannot be opened so the caller can
/// use [`init_logging_stderr`] instead.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("keeppaper")?;
    let log_file_path: PathBuf = xdg_dirs.place_state_file("keeppaper.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(Mutex::new(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!("keeppaper logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Log to stderr only.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
