//! Scoring: URL in, phishing probability out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::features::{check_schema, extract_features, SchemaMismatch};
use crate::model::Classifier;
use crate::verdict::{normalize_url, Verdict, VerdictPolicy};

/// Stateless scorer over one immutable classifier.
///
/// Cloning is cheap; all clones share the same model.
#[derive(Clone)]
pub struct Scorer {
    classifier: Arc<dyn Classifier>,
}

/// Share of the model score in [`Assessment::final_score`].
pub const ML_WEIGHT: f64 = 0.7;
/// Share of the threat-intel flag in [`Assessment::final_score`].
pub const INTEL_WEIGHT: f64 = 0.3;

/// Source that settled a scan besides the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// No threat-intel source consulted.
    None,
    /// Host matched the allowlist; the model was skipped.
    Allowlist,
}

/// Result of a scan: score plus the verdict derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Normalized URL; this is also what the model scored.
    pub url: String,
    pub ml_score: f64,
    /// 1 if a threat-intel source listed the URL. No source is wired in, so 0.
    pub intel_flag: u8,
    pub provider: Provider,
    /// `ML_WEIGHT * ml_score + INTEL_WEIGHT * intel_flag`.
    pub final_score: f64,
    pub verdict: Verdict,
    pub allowlisted: bool,
}

impl Scorer {
    /// Wraps `classifier`, refusing it if its input schema differs from the
    /// extractor's.
    pub fn new(classifier: Arc<dyn Classifier>) -> Result<Self, SchemaMismatch> {
        check_schema(classifier.input_schema())?;
        Ok(Self { classifier })
    }

    /// Probability that `url` is phishing, straight from the classifier.
    pub fn score(&self, url: &str) -> f64 {
        let row = extract_features(url).to_vector();
        self.classifier.predict_probability(&row)
    }

    /// Normalizes `url`, scores the normalized form and maps the result
    /// through `policy`.
    ///
    /// Allowlisted URLs are reported as legit with a zero score and never
    /// reach the classifier.
    pub fn assess(&self, url: &str, policy: &VerdictPolicy) -> Assessment {
        let normalized = normalize_url(url);
        if policy.is_allowlisted(&normalized) {
            return Assessment {
                url: normalized,
                ml_score: 0.0,
                intel_flag: 0,
                provider: Provider::Allowlist,
                final_score: 0.0,
                verdict: Verdict::Legit,
                allowlisted: true,
            };
        }
        let ml_score = self.score(&normalized);
        let intel_flag: u8 = 0;
        Assessment {
            final_score: ML_WEIGHT * ml_score + INTEL_WEIGHT * f64::from(intel_flag),
            url: normalized,
            ml_score,
            intel_flag,
            provider: Provider::None,
            verdict: policy.classify(ml_score),
            allowlisted: false,
        }
    }
}
