//! Logistic regression fitting by full-batch gradient descent.

use anyhow::{ensure, Result};

use crate::features::{feature_names_owned, FEATURE_COUNT};
use crate::model::{sigmoid, LogisticModel, FORMAT_VERSION};

/// Optimizer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub max_iter: usize,
    pub learning_rate: f64,
    /// Inverse L2 regularization strength; larger means weaker regularization.
    pub c: f64,
    /// Stop once the largest gradient component falls below this.
    pub tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            learning_rate: 0.1,
            c: 1.0,
            tolerance: 1e-6,
        }
    }
}

/// Fits a model to `rows` (feature vectors) and `labels` (0 or 1).
///
/// Columns are standardized first; a constant column gets scale 1 so it
/// contributes nothing. Both classes must be present.
pub fn fit(rows: &[[f64; FEATURE_COUNT]], labels: &[u8], opts: &FitOptions) -> Result<LogisticModel> {
    ensure!(!rows.is_empty(), "no training rows");
    ensure!(
        rows.len() == labels.len(),
        "{} rows but {} labels",
        rows.len(),
        labels.len()
    );
    ensure!(
        labels.iter().any(|&y| y == 1) && labels.iter().any(|&y| y == 0),
        "training data must contain both benign and phishing rows"
    );
    ensure!(opts.c > 0.0, "regularization strength c must be positive");
    ensure!(opts.learning_rate > 0.0, "learning rate must be positive");

    let n = rows.len() as f64;
    let (means, scales) = column_moments(rows);
    let z: Vec<[f64; FEATURE_COUNT]> = rows
        .iter()
        .map(|row| {
            let mut out = [0.0; FEATURE_COUNT];
            for j in 0..FEATURE_COUNT {
                out[j] = (row[j] - means[j]) / scales[j];
            }
            out
        })
        .collect();
    let l2 = 1.0 / (opts.c * n);

    let mut weights = [0.0; FEATURE_COUNT];
    let mut intercept = 0.0;
    let mut iterations = 0;
    for _ in 0..opts.max_iter {
        iterations += 1;
        let mut grad_w = [0.0; FEATURE_COUNT];
        let mut grad_b = 0.0;
        for (row, &y) in z.iter().zip(labels) {
            let linear = row
                .iter()
                .zip(&weights)
                .fold(intercept, |acc, (x, w)| acc + x * w);
            let err = sigmoid(linear) - f64::from(y);
            for j in 0..FEATURE_COUNT {
                grad_w[j] += err * row[j];
            }
            grad_b += err;
        }
        let mut largest = (grad_b / n).abs();
        for j in 0..FEATURE_COUNT {
            grad_w[j] = grad_w[j] / n + l2 * weights[j];
            largest = largest.max(grad_w[j].abs());
        }
        if largest < opts.tolerance {
            break;
        }
        for j in 0..FEATURE_COUNT {
            weights[j] -= opts.learning_rate * grad_w[j];
        }
        intercept -= opts.learning_rate * grad_b / n;
    }
    tracing::debug!(iterations, intercept, "logistic regression fitted");

    Ok(LogisticModel {
        format_version: FORMAT_VERSION,
        feature_names: feature_names_owned(),
        means: means.to_vec(),
        scales: scales.to_vec(),
        weights: weights.to_vec(),
        intercept,
        metadata: None,
    })
}

/// Per-column mean and population standard deviation (1.0 for constant columns).
fn column_moments(rows: &[[f64; FEATURE_COUNT]]) -> ([f64; FEATURE_COUNT], [f64; FEATURE_COUNT]) {
    let n = rows.len() as f64;
    let mut means = [0.0; FEATURE_COUNT];
    for row in rows {
        for j in 0..FEATURE_COUNT {
            means[j] += row[j];
        }
    }
    for m in &mut means {
        *m /= n;
    }
    let mut scales = [0.0; FEATURE_COUNT];
    for row in rows {
        for j in 0..FEATURE_COUNT {
            let d = row[j] - means[j];
            scales[j] += d * d;
        }
    }
    for s in &mut scales {
        let std = (*s / n).sqrt();
        *s = if std > 1e-12 { std } else { 1.0 };
    }
    (means, scales)
}
