//! Loading and saving the model artifact (pretty JSON on disk).

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::error::ModelError;
use super::logistic::LogisticModel;

/// A validated model plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model: LogisticModel,
    pub path: PathBuf,
    /// Lowercase hex SHA-256 of the artifact bytes.
    pub sha256: String,
}

impl LoadedModel {
    /// Short form of the fingerprint for logs and health output.
    pub fn short_fingerprint(&self) -> &str {
        &self.sha256[..self.sha256.len().min(12)]
    }
}

/// Reads, parses and validates the artifact at `path`.
pub fn load_artifact(path: &Path) -> Result<LoadedModel, ModelError> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ModelError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ModelError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let model: LogisticModel =
        serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    model.validate()?;

    let sha256 = hex::encode(Sha256::digest(&bytes));
    tracing::info!(
        path = %path.display(),
        sha256 = %sha256,
        format_version = model.format_version,
        "model artifact loaded"
    );
    Ok(LoadedModel {
        model,
        path: path.to_path_buf(),
        sha256,
    })
}

/// Validates `model` and writes it to `path`, creating parent directories.
pub fn save_artifact(model: &LogisticModel, path: &Path) -> Result<(), ModelError> {
    model.validate()?;
    let json = serde_json::to_vec_pretty(model).map_err(ModelError::Serialize)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ModelError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, json).map_err(|source| ModelError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "model artifact written");
    Ok(())
}
