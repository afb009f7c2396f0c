//! Feature schema: the column names and order shared by training and scoring.

use thiserror::Error;

/// Number of columns in a feature row.
pub const FEATURE_COUNT: usize = 13;

/// Column names in the exact order rows are fed to the classifier.
///
/// Training persists this list inside the model artifact and scoring checks it
/// back at load time, so neither side ever guesses the column order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "url_length",
    "num_dots",
    "num_hyphens",
    "num_at",
    "num_qm",
    "num_eq",
    "num_slashes",
    "num_digits",
    "has_ip",
    "has_https",
    "suspicious_tld",
    "path_length",
    "host_length",
];

/// An artifact's declared input columns disagree with [`FEATURE_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaMismatch {
    #[error("model expects {actual} feature columns, extractor produces {expected}")]
    Length { expected: usize, actual: usize },
    #[error("feature column {index} is `{actual}` in the model, extractor produces `{expected}`")]
    Column {
        index: usize,
        expected: &'static str,
        actual: String,
    },
}

/// Checks that `columns` names the extractor's features in the extractor's order.
pub fn check_schema(columns: &[String]) -> Result<(), SchemaMismatch> {
    if columns.len() != FEATURE_COUNT {
        return Err(SchemaMismatch::Length {
            expected: FEATURE_COUNT,
            actual: columns.len(),
        });
    }
    for (index, (expected, actual)) in FEATURE_NAMES.into_iter().zip(columns).enumerate() {
        if expected != actual.as_str() {
            return Err(SchemaMismatch::Column {
                index,
                expected,
                actual: actual.clone(),
            });
        }
    }
    Ok(())
}

/// Owned copy of [`FEATURE_NAMES`], as stored in model artifacts.
pub fn feature_names_owned() -> Vec<String> {
    FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
}
