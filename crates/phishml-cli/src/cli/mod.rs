//! CLI for the phishml URL scorer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use phishml_core::logging::LogTarget;
use std::path::PathBuf;

use commands::{run_completions, run_features, run_man, run_score, run_serve, run_train, TrainArgs};

/// Top-level CLI for the phishml URL scorer.
#[derive(Debug, Parser)]
#[command(name = "phishml")]
#[command(about = "phishml: lexical URL phishing scorer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the HTTP scoring endpoint (GET /, POST /predict, POST /scan).
    Serve {
        /// Listen address; overrides `bind_addr` from config.toml.
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
        /// Model artifact; overrides `model_path` from config.toml.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
        /// Log to stderr instead of the state-dir log file.
        #[arg(long)]
        log_stderr: bool,
    },

    /// Train a model from a CSV with `url` and `label` columns.
    Train {
        /// Labeled dataset (label 0 = benign, 1 = phishing).
        #[arg(long, value_name = "PATH")]
        data: PathBuf,
        /// Where to write the artifact; defaults to the configured model path.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Fraction of rows held out for evaluation.
        #[arg(long, default_value = "0.2", value_name = "FRACTION")]
        test_size: f64,
        /// Seed for the train/test shuffle.
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Maximum gradient descent iterations.
        #[arg(long, default_value = "1000", value_name = "N")]
        max_iter: usize,
    },

    /// Score one URL and print probability and verdict.
    Score {
        /// URL to score (scheme optional).
        url: String,
        /// Model artifact; overrides `model_path` from config.toml.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Print the feature record of a URL as JSON.
    Features {
        /// URL to inspect (scheme optional).
        url: String,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl Cli {
    /// `serve --log-stderr` logs to stderr; everything else to the log file.
    pub fn log_target(&self) -> LogTarget {
        match self.command {
            CliCommand::Serve {
                log_stderr: true, ..
            } => LogTarget::Stderr,
            _ => LogTarget::File,
        }
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Serve {
                bind,
                model,
                log_stderr: _,
            } => run_serve(bind, model).await?,
            CliCommand::Train {
                data,
                out,
                test_size,
                seed,
                max_iter,
            } => {
                run_train(TrainArgs {
                    data,
                    out,
                    test_size,
                    seed,
                    max_iter,
                })
                .await?
            }
            CliCommand::Score { url, model } => run_score(&url, model)?,
            CliCommand::Features { url } => run_features(&url)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
