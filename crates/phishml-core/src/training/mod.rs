//! Offline training: labeled CSV in, model artifact out.
//!
//! Rows go through the same [`extract_features`] as scoring, and the artifact
//! records the feature schema, so a model trained here always lines up with
//! the service that loads it.

mod dataset;
mod fit;
mod report;

pub use dataset::{load_dataset, read_dataset, train_test_split, LabeledUrl};
pub use fit::{fit, FitOptions};
pub use report::{ClassMetrics, ClassificationReport};

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::features::{extract_features, FEATURE_COUNT};
use crate::model::{save_artifact, Classifier, LogisticModel, TrainingMetadata};

/// Probability above which a held-out row is predicted phishing.
const DECISION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub data_path: PathBuf,
    pub out_path: PathBuf,
    pub test_size: f64,
    pub seed: u64,
    pub fit: FitOptions,
}

impl TrainOptions {
    pub fn new(data_path: PathBuf, out_path: PathBuf) -> Self {
        Self {
            data_path,
            out_path,
            test_size: 0.2,
            seed: 42,
            fit: FitOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrainOutcome {
    pub model: LogisticModel,
    pub report: ClassificationReport,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Builds the feature matrix and label vector for `rows`.
pub fn feature_matrix(rows: &[LabeledUrl]) -> (Vec<[f64; FEATURE_COUNT]>, Vec<u8>) {
    rows.iter()
        .map(|r| (extract_features(&r.url).to_vector(), r.label))
        .unzip()
}

/// Load, split, fit, evaluate and save.
pub fn run_training(opts: &TrainOptions) -> Result<TrainOutcome> {
    let rows = load_dataset(&opts.data_path)?;
    tracing::info!(rows = rows.len(), path = %opts.data_path.display(), "dataset loaded");

    let (train, test) = train_test_split(&rows, opts.test_size, opts.seed)?;
    let (train_x, train_y) = feature_matrix(&train);
    let (test_x, test_y) = feature_matrix(&test);

    let mut model = fit(&train_x, &train_y, &opts.fit).context("fit classifier")?;

    let predicted: Vec<u8> = test_x
        .iter()
        .map(|row| u8::from(model.predict_probability(row) > DECISION_THRESHOLD))
        .collect();
    let report = ClassificationReport::compute(&test_y, &predicted);
    tracing::info!(
        train_rows = train.len(),
        test_rows = test.len(),
        accuracy = report.accuracy,
        "model evaluated"
    );

    model.metadata = Some(TrainingMetadata {
        train_rows: train.len(),
        test_rows: test.len(),
        seed: opts.seed,
        test_accuracy: report.accuracy,
    });
    save_artifact(&model, &opts.out_path)
        .with_context(|| format!("save model to {}", opts.out_path.display()))?;

    Ok(TrainOutcome {
        model,
        report,
        train_rows: train.len(),
        test_rows: test.len(),
    })
}
