//! Top-level label extraction and the suspicious-TLD denylist.

/// Top-level labels associated with elevated phishing incidence.
pub const SUSPICIOUS_TLDS: &[&str] = &["xyz", "top", "icu", "zip", "mov", "click", "work", "gq", "tk"];

/// Returns true if `tld` is on the denylist. The empty label never matches.
pub fn is_suspicious_tld(tld: &str) -> bool {
    !tld.is_empty() && SUSPICIOUS_TLDS.contains(&tld)
}

/// Label after the last `.` of `host`, with any `:port` suffix removed.
///
/// Hosts without a dot have no top-level label and yield `""`.
pub fn top_level_label(host: &str) -> &str {
    match host.rsplit_once('.') {
        Some((_, last)) => last.split(':').next().unwrap_or(""),
        None => "",
    }
}
