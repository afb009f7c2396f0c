//! CLI command handlers, one file per command.

mod completions;
mod features;
mod score;
mod serve;
mod train;

pub use completions::{run_completions, run_man};
pub use features::run_features;
pub use score::run_score;
pub use serve::run_serve;
pub use train::{run_train, TrainArgs};

use anyhow::Result;
use phishml_core::config::PhishmlConfig;
use phishml_core::paths;
use std::path::PathBuf;

/// An explicit `--model` path is used as typed; the configured path is
/// anchored at the installation root.
fn model_path(flag: Option<PathBuf>, cfg: &PhishmlConfig) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => paths::resolve_model_path(&cfg.model_path),
    }
}
