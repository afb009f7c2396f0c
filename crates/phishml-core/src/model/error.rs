//! Model artifact errors. All of these are fatal for the scoring service.

use std::path::PathBuf;

use thiserror::Error;

use crate::features::SchemaMismatch;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("read model artifact {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write model artifact {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse model artifact {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("serialize model artifact")]
    Serialize(#[source] serde_json::Error),
    #[error("unsupported model format version {found} (this build reads version {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("model has {actual} {what}, expected {expected}")]
    Shape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("model parameter {what} is not a usable number")]
    InvalidParameter { what: String },
    #[error("model input schema does not match the feature extractor")]
    Schema(#[from] SchemaMismatch),
}
