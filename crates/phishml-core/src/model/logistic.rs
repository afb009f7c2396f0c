//! Standardized logistic regression.

use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::Classifier;
use crate::features::{check_schema, FEATURE_COUNT};

/// Artifact format this build reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// Provenance recorded by the trainer; not used for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetadata {
    pub train_rows: usize,
    pub test_rows: usize,
    pub seed: u64,
    pub test_accuracy: f64,
}

/// Binary logistic regression over standardized feature columns.
///
/// `p = sigmoid(intercept + Σ weights[i] * (x[i] - means[i]) / scales[i])`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub format_version: u32,
    /// Input columns, in the order the weights apply to.
    pub feature_names: Vec<String>,
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub metadata: Option<TrainingMetadata>,
}

impl LogisticModel {
    /// Checks version, schema, vector shapes and parameter sanity.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: self.format_version,
                supported: FORMAT_VERSION,
            });
        }
        check_schema(&self.feature_names)?;
        for (what, v) in [
            ("means", &self.means),
            ("scales", &self.scales),
            ("weights", &self.weights),
        ] {
            if v.len() != FEATURE_COUNT {
                return Err(ModelError::Shape {
                    what,
                    expected: FEATURE_COUNT,
                    actual: v.len(),
                });
            }
        }
        for i in 0..FEATURE_COUNT {
            let name = &self.feature_names[i];
            if !self.means[i].is_finite() {
                return Err(ModelError::InvalidParameter {
                    what: format!("means[{name}]"),
                });
            }
            if !self.weights[i].is_finite() {
                return Err(ModelError::InvalidParameter {
                    what: format!("weights[{name}]"),
                });
            }
            if !(self.scales[i].is_finite() && self.scales[i] > 0.0) {
                return Err(ModelError::InvalidParameter {
                    what: format!("scales[{name}]"),
                });
            }
        }
        if !self.intercept.is_finite() {
            return Err(ModelError::InvalidParameter {
                what: "intercept".to_string(),
            });
        }
        Ok(())
    }

    /// Linear score before the sigmoid.
    pub fn decision_function(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        row.iter()
            .zip(&self.means)
            .zip(&self.scales)
            .zip(&self.weights)
            .fold(self.intercept, |acc, (((x, m), s), w)| acc + w * (x - m) / s)
    }
}

impl Classifier for LogisticModel {
    fn input_schema(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_probability(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        sigmoid(self.decision_function(row))
    }
}

/// Logistic function, stable for large `|z|`.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
