//! The classifier behind the scoring service.
//!
//! The service only relies on [`Classifier`]; [`LogisticModel`] is the
//! concrete model the trainer produces and the artifact stores.

mod artifact;
mod error;
mod logistic;

pub use artifact::{load_artifact, save_artifact, LoadedModel};
pub use error::ModelError;
pub use logistic::{sigmoid, LogisticModel, TrainingMetadata, FORMAT_VERSION};

use crate::features::FEATURE_COUNT;

/// Read-only probability model, shared across concurrent requests.
pub trait Classifier: Send + Sync {
    /// Column names the model was trained on, in input order.
    fn input_schema(&self) -> &[String];

    /// Probability of the positive (phishing) class for one row.
    fn predict_probability(&self, row: &[f64; FEATURE_COUNT]) -> f64;
}
