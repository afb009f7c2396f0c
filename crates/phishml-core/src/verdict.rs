//! Verdicts derived from a score, and the domain allowlist.

use serde::{Deserialize, Serialize};

use crate::config::VerdictConfig;
use crate::features::trim_url;

/// Coarse label for a phishing probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Legit,
    Suspicious,
    Phishing,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Legit => "legit",
            Verdict::Suspicious => "suspicious",
            Verdict::Phishing => "phishing",
        };
        f.write_str(s)
    }
}

/// Thresholds and allowlisted domains used to turn scores into verdicts.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictPolicy {
    pub suspicious_threshold: f64,
    pub phishing_threshold: f64,
    /// Lower-cased registrable domains; subdomains match too.
    pub allowlist: Vec<String>,
}

impl Default for VerdictPolicy {
    fn default() -> Self {
        Self::from(&VerdictConfig::default())
    }
}

impl From<&VerdictConfig> for VerdictPolicy {
    fn from(cfg: &VerdictConfig) -> Self {
        Self {
            suspicious_threshold: cfg.suspicious_threshold,
            phishing_threshold: cfg.phishing_threshold,
            allowlist: cfg
                .allowlist
                .iter()
                .map(|d| d.trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }
}

impl VerdictPolicy {
    pub fn classify(&self, score: f64) -> Verdict {
        if score >= self.phishing_threshold {
            Verdict::Phishing
        } else if score >= self.suspicious_threshold {
            Verdict::Suspicious
        } else {
            Verdict::Legit
        }
    }

    /// True if the host of `url` is an allowlisted domain or a subdomain of one.
    ///
    /// URLs that do not parse strictly are never allowlisted.
    pub fn is_allowlisted(&self, url: &str) -> bool {
        let Some(host) = allowlist_host(url) else {
            return false;
        };
        self.allowlist.iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

/// Trims `url` the way feature extraction does and prepends `http://` unless
/// it already starts with an `http://` or `https://` scheme (any case).
pub fn normalize_url(url: &str) -> String {
    let trimmed = trim_url(url);
    let lower_prefix: String = trimmed.chars().take(8).collect::<String>().to_ascii_lowercase();
    if lower_prefix.starts_with("http://") || lower_prefix.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

fn allowlist_host(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    Some(match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    })
}
