use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::DEFAULT_MODEL_PATH;
use crate::scan_log;

/// Verdict thresholds and allowlist (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictConfig {
    /// Scores at or above this are reported as suspicious.
    pub suspicious_threshold: f64,
    /// Scores at or above this are reported as phishing.
    pub phishing_threshold: f64,
    /// Domains whose URLs are always legit (subdomains included).
    #[serde(default)]
    pub allowlist: Vec<String>,
}

impl Default for VerdictConfig {
    fn default() -> Self {
        Self {
            suspicious_threshold: 0.75,
            phishing_threshold: 0.92,
            allowlist: [
                "google.com",
                "microsoft.com",
                "github.com",
                "stackoverflow.com",
                "wikipedia.org",
                "youtube.com",
                "linkedin.com",
                "amazon.com",
            ]
            .iter()
            .map(|d| d.to_string())
            .collect(),
        }
    }
}

/// Global configuration loaded from `~/.config/phishml/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishmlConfig {
    /// Address the scoring service listens on.
    pub bind_addr: String,
    /// Model artifact; relative paths are resolved against the installation root.
    pub model_path: PathBuf,
    /// Scan results kept in memory for `/admin/recent`.
    #[serde(default = "default_scan_log_capacity")]
    pub scan_log_capacity: usize,
    /// Optional verdict settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub verdict: Option<VerdictConfig>,
}

impl Default for PhishmlConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            scan_log_capacity: scan_log::DEFAULT_CAPACITY,
            verdict: None,
        }
    }
}

fn default_scan_log_capacity() -> usize {
    scan_log::DEFAULT_CAPACITY
}

impl PhishmlConfig {
    /// Verdict settings, falling back to defaults.
    pub fn verdict_or_default(&self) -> VerdictConfig {
        self.verdict.clone().unwrap_or_default()
    }

    /// Rejects thresholds outside `0 <= suspicious <= phishing <= 1`.
    pub fn validate(&self) -> Result<()> {
        if let Some(v) = &self.verdict {
            ensure!(
                (0.0..=1.0).contains(&v.suspicious_threshold)
                    && (0.0..=1.0).contains(&v.phishing_threshold),
                "verdict thresholds must lie in [0, 1]"
            );
            ensure!(
                v.suspicious_threshold <= v.phishing_threshold,
                "suspicious_threshold ({}) must not exceed phishing_threshold ({})",
                v.suspicious_threshold,
                v.phishing_threshold
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishml")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishmlConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PhishmlConfig> {
    if !path.exists() {
        let default_cfg = PhishmlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: PhishmlConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PhishmlConfig::default();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8000");
        assert_eq!(cfg.model_path, PathBuf::from("models/model.json"));
        assert!(cfg.verdict.is_none());
        let v = cfg.verdict_or_default();
        assert_eq!(v.suspicious_threshold, 0.75);
        assert_eq!(v.phishing_threshold, 0.92);
        assert_eq!(v.allowlist.len(), 8);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PhishmlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PhishmlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.bind_addr, cfg.bind_addr);
        assert_eq!(parsed.model_path, cfg.model_path);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            bind_addr = "0.0.0.0:9000"
            model_path = "/srv/phishml/model.json"
            scan_log_capacity = 50

            [verdict]
            suspicious_threshold = 0.6
            phishing_threshold = 0.9
            allowlist = ["example.org"]
        "#;
        let cfg: PhishmlConfig = toml::from_str(toml).unwrap();
        cfg.validate().unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.model_path, PathBuf::from("/srv/phishml/model.json"));
        assert_eq!(cfg.scan_log_capacity, 50);
        let v = cfg.verdict.as_ref().unwrap();
        assert!((v.suspicious_threshold - 0.6).abs() < 1e-9);
        assert_eq!(v.allowlist, vec!["example.org".to_string()]);
    }

    #[test]
    fn config_rejects_inverted_thresholds() {
        let toml = r#"
            bind_addr = "127.0.0.1:8000"
            model_path = "models/model.json"

            [verdict]
            suspicious_threshold = 0.95
            phishing_threshold = 0.9
        "#;
        let cfg: PhishmlConfig = toml::from_str(toml).unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phishml").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.bind_addr, "127.0.0.1:8000");

        std::fs::write(
            &path,
            "bind_addr = \"127.0.0.1:9999\"\nmodel_path = \"m.json\"\n",
        )
        .unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:9999");
        assert_eq!(cfg.model_path, PathBuf::from("m.json"));
        assert_eq!(cfg.scan_log_capacity, 1000);
    }
}
