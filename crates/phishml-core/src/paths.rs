//! Resolution of the model artifact path.
//!
//! Relative artifact paths are anchored at the installation root (the
//! directory holding the running executable), never at the working directory,
//! so the service finds its model regardless of where it is started from.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default artifact location, relative to the installation root.
pub const DEFAULT_MODEL_PATH: &str = "models/model.json";

/// Directory containing the running executable.
pub fn install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate running executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("executable has no parent directory: {}", exe.display()))?;
    Ok(dir.to_path_buf())
}

/// Anchors a relative `path` at `root`; absolute paths are returned unchanged.
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Resolves a configured artifact path against the installation root.
pub fn resolve_model_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(resolve_against(&install_root()?, path))
}
