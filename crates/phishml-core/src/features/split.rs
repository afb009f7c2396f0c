//! Lenient URL splitting.
//!
//! Unlike a WHATWG parser this never rejects input: a string that does not
//! look like a URL simply yields an empty scheme and host, and whatever is
//! left becomes the path.

/// Scheme, authority and path of a URL, as used for feature extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    /// Lower-cased scheme, or empty if the input has none.
    pub scheme: String,
    /// Lower-cased authority, including any userinfo and port.
    pub host: String,
    /// Lower-cased path, without query or fragment.
    pub path: String,
}

/// Splits `raw` into scheme, authority and path.
///
/// Tabs and line breaks are dropped first, and leading control characters and
/// spaces are ignored. The authority is only recognised after a `//` and ends
/// at the first `/`, `?` or `#`. An authority with unbalanced IPv6 brackets is
/// unparsable and leaves the host empty.
pub fn split_url(raw: &str) -> UrlParts {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let mut rest = cleaned.trim_start_matches(|c: char| c <= ' ');

    let mut parts = UrlParts::default();

    if let Some((candidate, after)) = rest.split_once(':') {
        if is_scheme(candidate) {
            parts.scheme = candidate.to_ascii_lowercase();
            rest = after;
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .find(|c: char| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after.len());
        let authority = &after[..end];
        if brackets_balanced(authority) {
            parts.host = authority.to_lowercase();
        }
        rest = &after[end..];
    }

    let end = rest
        .find(|c: char| matches!(c, '?' | '#'))
        .unwrap_or(rest.len());
    parts.path = rest[..end].to_lowercase();
    parts
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn brackets_balanced(authority: &str) -> bool {
    authority.contains('[') == authority.contains(']')
}
