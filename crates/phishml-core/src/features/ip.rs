//! Dotted-quad host detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// Four dot-separated groups of one to three decimal digits (any script).
static IPV4_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,3}(?:\.\d{1,3}){3}$").unwrap());

/// Returns true if `host` (after dropping everything from the first `:`) is
/// four dot-separated groups of one to three decimal digits.
///
/// Octet ranges are not checked: `999.999.999.999` counts as IP-shaped.
pub fn is_ipv4_shaped(host: &str) -> bool {
    let bare = host.split(':').next().unwrap_or("");
    IPV4_SHAPE.is_match(bare)
}
