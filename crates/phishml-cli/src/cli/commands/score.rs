//! `phishml score <url>` – score one URL from the command line.

use anyhow::{ensure, Result};
use phishml_core::config;
use phishml_core::features::trim_url;
use phishml_core::model::load_artifact;
use phishml_core::scoring::Scorer;
use phishml_core::verdict::VerdictPolicy;
use std::path::PathBuf;
use std::sync::Arc;

pub fn run_score(url: &str, model: Option<PathBuf>) -> Result<()> {
    ensure!(!trim_url(url).is_empty(), "url is required");
    let cfg = config::load_or_init()?;
    let path = super::model_path(model, &cfg)?;
    let loaded = load_artifact(&path)?;
    let scorer = Scorer::new(Arc::new(loaded.model))?;
    let policy = VerdictPolicy::from(&cfg.verdict_or_default());

    let a = scorer.assess(url, &policy);
    let note = if a.allowlisted { "  (allowlisted)" } else { "" };
    println!("{:.4}  {:<10}  {}{}", a.ml_score, a.verdict, a.url, note);
    Ok(())
}
