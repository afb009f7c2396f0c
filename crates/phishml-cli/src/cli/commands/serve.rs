//! `phishml serve` – run the HTTP scoring service.

use anyhow::Result;
use phishml_core::config;
use phishml_core::service::{self, ServeOptions};
use phishml_core::verdict::VerdictPolicy;
use std::path::PathBuf;

pub async fn run_serve(bind: Option<String>, model: Option<PathBuf>) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let opts = ServeOptions {
        bind_addr: bind.unwrap_or_else(|| cfg.bind_addr.clone()),
        model_path: super::model_path(model, &cfg)?,
        policy: VerdictPolicy::from(&cfg.verdict_or_default()),
        scan_log_capacity: cfg.scan_log_capacity,
    };
    println!("Loading model from {}", opts.model_path.display());
    service::run(opts).await
}
