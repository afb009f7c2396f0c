//! Per-class precision/recall/F1 on a held-out set.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Binary classification report; class 0 is benign, class 1 phishing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub classes: [ClassMetrics; 2],
    pub accuracy: f64,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

impl ClassificationReport {
    /// Compares `predicted` against `truth`. Undefined ratios (no predictions
    /// or no samples of a class) count as 0.
    pub fn compute(truth: &[u8], predicted: &[u8]) -> Self {
        let total = truth.len().min(predicted.len());
        let mut classes = [ClassMetrics::default(); 2];
        let mut correct = 0usize;

        for (label, metrics) in classes.iter_mut().enumerate() {
            let label = label as u8;
            let mut tp = 0usize;
            let mut predicted_pos = 0usize;
            let mut actual_pos = 0usize;
            for (&t, &p) in truth.iter().zip(predicted) {
                if p == label {
                    predicted_pos += 1;
                }
                if t == label {
                    actual_pos += 1;
                    if p == label {
                        tp += 1;
                    }
                }
            }
            correct += tp;
            let precision = ratio(tp, predicted_pos);
            let recall = ratio(tp, actual_pos);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };
            *metrics = ClassMetrics {
                precision,
                recall,
                f1,
                support: actual_pos,
            };
        }

        let macro_avg = ClassMetrics {
            precision: (classes[0].precision + classes[1].precision) / 2.0,
            recall: (classes[0].recall + classes[1].recall) / 2.0,
            f1: (classes[0].f1 + classes[1].f1) / 2.0,
            support: total,
        };
        let weighted = |f: fn(&ClassMetrics) -> f64| {
            if total == 0 {
                0.0
            } else {
                classes
                    .iter()
                    .map(|c| f(c) * c.support as f64)
                    .sum::<f64>()
                    / total as f64
            }
        };
        let weighted_avg = ClassMetrics {
            precision: weighted(|c| c.precision),
            recall: weighted(|c| c.recall),
            f1: weighted(|c| c.f1),
            support: total,
        };

        Self {
            classes,
            accuracy: ratio(correct, total),
            macro_avg,
            weighted_avg,
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12}  {:>9}  {:>9}  {:>9}  {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (name, m) in [("benign (0)", &self.classes[0]), ("phish (1)", &self.classes[1])] {
            writeln!(
                f,
                "{:>12}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9}",
                name, m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12}  {:>9}  {:>9}  {:>9.2}  {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        for (name, m) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>12}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9}",
                name, m.precision, m.recall, m.f1, m.support
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_predictions() {
        let r = ClassificationReport::compute(&[0, 1, 1, 0], &[0, 1, 1, 0]);
        assert_eq!(r.accuracy, 1.0);
        assert_eq!(r.classes[0].f1, 1.0);
        assert_eq!(r.classes[1].f1, 1.0);
        assert_eq!(r.classes[1].support, 2);
        assert_eq!(r.weighted_avg.support, 4);
    }

    #[test]
    fn mixed_predictions() {
        // truth:     0 0 0 1 1
        // predicted: 0 1 0 1 0
        let r = ClassificationReport::compute(&[0, 0, 0, 1, 1], &[0, 1, 0, 1, 0]);
        assert!((r.accuracy - 0.6).abs() < 1e-12);
        let benign = r.classes[0];
        assert!((benign.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((benign.recall - 2.0 / 3.0).abs() < 1e-12);
        let phish = r.classes[1];
        assert!((phish.precision - 0.5).abs() < 1e-12);
        assert!((phish.recall - 0.5).abs() < 1e-12);
        assert!((r.macro_avg.f1 - (2.0 / 3.0 + 0.5) / 2.0).abs() < 1e-12);
        assert!((r.weighted_avg.recall - 0.6).abs() < 1e-12);
    }

    #[test]
    fn never_predicted_class_scores_zero() {
        let r = ClassificationReport::compute(&[0, 1, 1], &[0, 0, 0]);
        assert_eq!(r.classes[1].precision, 0.0);
        assert_eq!(r.classes[1].recall, 0.0);
        assert_eq!(r.classes[1].f1, 0.0);
    }

    #[test]
    fn renders_table() {
        let text = ClassificationReport::compute(&[0, 1], &[0, 1]).to_string();
        assert!(text.contains("precision"));
        assert!(text.contains("benign (0)"));
        assert!(text.contains("phish (1)"));
        assert!(text.contains("weighted avg"));
        assert!(text.contains("1.00"));
    }
}
