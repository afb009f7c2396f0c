//! `phishml train` – fit a model from a labeled CSV.

use anyhow::{Context, Result};
use phishml_core::config;
use phishml_core::training::{self, TrainOptions};
use std::path::PathBuf;

/// Flags of `phishml train`.
#[derive(Debug, Clone)]
pub struct TrainArgs {
    pub data: PathBuf,
    pub out: Option<PathBuf>,
    pub test_size: f64,
    pub seed: u64,
    pub max_iter: usize,
}

pub async fn run_train(args: TrainArgs) -> Result<()> {
    let cfg = config::load_or_init()?;
    let out = match args.out {
        Some(out) => out,
        None => super::model_path(None, &cfg)?,
    };

    let mut opts = TrainOptions::new(args.data, out);
    opts.test_size = args.test_size;
    opts.seed = args.seed;
    opts.fit.max_iter = args.max_iter;

    let outcome = tokio::task::spawn_blocking({
        let opts = opts.clone();
        move || training::run_training(&opts)
    })
    .await
    .context("training task join")??;

    println!(
        "Trained on {} rows, evaluated on {} rows.\n",
        outcome.train_rows, outcome.test_rows
    );
    print!("{}", outcome.report);
    println!("\nModel saved to {}", opts.out_path.display());
    Ok(())
}
