//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Filter comes from `RUST_LOG`, defaulting to `info,phishml=debug`.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,phishml=debug";
const LOG_FILE_NAME: &str = "phishml.log";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Log file under the XDG state dir; stderr if that cannot be opened.
    #[default]
    File,
    /// Stderr only, e.g. when running under a supervisor that captures it.
    Stderr,
}

/// Installs the global subscriber for `target`.
pub fn init(target: LogTarget) {
    match target {
        LogTarget::File => {
            if let Err(err) = init_logging() {
                init_logging_stderr();
                tracing::warn!("file logging unavailable, using stderr: {err:#}");
            }
        }
        LogTarget::Stderr => init_logging_stderr(),
    }
}

/// `$XDG_STATE_HOME/phishml/phishml.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishml")?;
    Ok(xdg_dirs.get_state_home().join("phishml").join(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating it and its parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

/// Initialize structured logging to the file at [`log_file_path`].
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;

    tracing::info!("phishml logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file). A no-op if a subscriber is
/// already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
