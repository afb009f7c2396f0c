//! URL feature extraction.
//!
//! Turns an arbitrary, possibly malformed URL string into the fixed-schema
//! [`FeatureRecord`] fed to the classifier. Training and scoring both go
//! through [`extract_features`], so the two lifecycles cannot drift apart.

mod chars;
mod ip;
mod record;
mod schema;
mod split;
mod tld;

pub use chars::{char_len, count_digits, trim_url};
pub use ip::is_ipv4_shaped;
pub use record::FeatureRecord;
pub use schema::{check_schema, feature_names_owned, SchemaMismatch, FEATURE_COUNT, FEATURE_NAMES};
pub use split::{split_url, UrlParts};
pub use tld::{is_suspicious_tld, top_level_label, SUSPICIOUS_TLDS};

/// Scheme assumed for parsing when the input has no `://`.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Computes the feature record for `url`.
///
/// Total and deterministic: any string, including `""`, yields a record.
/// Character counts and `url_length` are taken over the trimmed input, never
/// over the scheme-augmented string used for parsing. Trimming drops Unicode
/// whitespace and the `U+001C..=U+001F` separators; digits are counted in any
/// script. Counters saturate at `u32::MAX`.
///
/// # Examples
///
/// - `extract_features("example.com")` → `url_length == 11`, `host_length == 11`
/// - `extract_features("https://example.xyz/a?b=1")` → `has_https == 1`, `suspicious_tld == 1`
pub fn extract_features(url: &str) -> FeatureRecord {
    let u = trim_url(url);
    let parts = if u.contains("://") {
        split_url(u)
    } else {
        split_url(&format!("{DEFAULT_SCHEME_PREFIX}{u}"))
    };

    let mut record = FeatureRecord {
        url_length: char_len(u),
        num_digits: count_digits(u),
        has_ip: u8::from(is_ipv4_shaped(&parts.host)),
        has_https: u8::from(parts.scheme.eq_ignore_ascii_case("https")),
        suspicious_tld: u8::from(is_suspicious_tld(top_level_label(&parts.host))),
        path_length: char_len(&parts.path),
        host_length: char_len(&parts.host),
        ..FeatureRecord::default()
    };

    for c in u.chars() {
        let counter = match c {
            '.' => &mut record.num_dots,
            '-' => &mut record.num_hyphens,
            '@' => &mut record.num_at,
            '?' => &mut record.num_qm,
            '=' => &mut record.num_eq,
            '/' => &mut record.num_slashes,
            _ => continue,
        };
        *counter = counter.saturating_add(1);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(extract_features(""), FeatureRecord::default());
        assert_eq!(extract_features("   \t\n"), FeatureRecord::default());
    }

    #[test]
    fn bare_domain_assumes_http() {
        let f = extract_features("example.com");
        assert_eq!(f.url_length, 11);
        assert_eq!(f.host_length, 11);
        assert_eq!(f.path_length, 0);
        assert_eq!(f.has_https, 0);
        assert_eq!(f.num_slashes, 0);
        assert_eq!(f.num_dots, 1);
        assert_eq!(f.suspicious_tld, 0);
    }

    #[test]
    fn https_suspicious_tld_with_query() {
        let f = extract_features("https://example.xyz/a?b=1");
        assert_eq!(f.has_https, 1);
        assert_eq!(f.suspicious_tld, 1);
        assert_eq!(f.num_qm, 1);
        assert_eq!(f.num_eq, 1);
        // Every '/' in the literal string, including the two after "https:".
        assert_eq!(f.num_slashes, 3);
        assert_eq!(f.num_digits, 1);
        assert_eq!(f.url_length, 25);
        assert_eq!(f.host_length, 11);
        assert_eq!(f.path_length, 2);
    }

    #[test]
    fn ip_host() {
        let f = extract_features("http://192.168.1.1/login");
        assert_eq!(f.has_ip, 1);
        assert_eq!(f.host_length, 11);
        assert_eq!(f.path_length, 6);
        assert_eq!(f.num_digits, 8);
    }

    #[test]
    fn ip_host_with_port() {
        let f = extract_features("http://192.168.1.1:8080/login");
        assert_eq!(f.has_ip, 1);
        assert_eq!(f.host_length, "192.168.1.1:8080".len() as u32);
        assert_eq!(f.suspicious_tld, 0);
    }

    #[test]
    fn out_of_range_octets_still_ip_shaped() {
        assert_eq!(extract_features("999.999.999.999/x").has_ip, 1);
    }

    #[test]
    fn scheme_compared_case_insensitively() {
        let f = extract_features("HTTPS://Example.COM/Path");
        assert_eq!(f.has_https, 1);
        assert_eq!(f.host_length, 11);
        assert_eq!(f.path_length, 5);
        assert_eq!(extract_features("httpsx://example.com").has_https, 0);
    }

    #[test]
    fn suspicious_tld_behind_port() {
        assert_eq!(extract_features("http://free-gift.tk:8080/").suspicious_tld, 1);
        assert_eq!(extract_features("FREE-GIFT.TK").suspicious_tld, 1);
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(
            extract_features("  http://example.com/a  "),
            extract_features("http://example.com/a")
        );
    }

    #[test]
    fn repeated_separators_are_only_counted() {
        let f = extract_features("http://a@b@c.com/?x=1?y=2");
        assert_eq!(f.num_at, 2);
        assert_eq!(f.num_qm, 2);
        assert_eq!(f.num_eq, 2);
        assert_eq!(f.host_length, "a@b@c.com".len() as u32);
    }

    #[test]
    fn malformed_inputs_never_fail() {
        for raw in [
            "://",
            "http://",
            "http://[",
            "::::",
            "@@@",
            "http://exa mple.com/ pa th",
            "javascript:alert(1)",
            "ftp://",
            "\u{0}\u{1}",
            "日本語.みんな/パス",
        ] {
            let f = extract_features(raw);
            assert!(f.has_ip <= 1 && f.has_https <= 1 && f.suspicious_tld <= 1);
            assert_eq!(f.url_length as usize, trim_url(raw).chars().count());
        }
    }

    #[test]
    fn scheme_only_input() {
        let f = extract_features("://");
        assert_eq!(f.url_length, 3);
        assert_eq!(f.num_slashes, 2);
        assert_eq!(f.host_length, 0);
        assert_eq!(f.has_https, 0);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let f = extract_features("http://bücher.de/straße");
        assert_eq!(f.url_length, 23);
        assert_eq!(f.host_length, 9);
        assert_eq!(f.path_length, 7);
    }

    /// Record in `FEATURE_NAMES` order.
    fn row(url: &str) -> [u32; FEATURE_COUNT] {
        extract_features(url).to_vector().map(|v| v as u32)
    }

    #[test]
    fn non_ascii_digits_counted() {
        assert_eq!(
            row("http://١٩٢.١٦٨.١.١/login"),
            [24, 3, 0, 0, 0, 0, 3, 8, 1, 0, 0, 6, 11]
        );
        assert_eq!(
            row("http://١٩٢.١٦٨.١.١:٨٠/a"),
            [23, 3, 0, 0, 0, 0, 3, 10, 1, 0, 0, 2, 14]
        );
        assert_eq!(row("１２３.com"), [7, 1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 7]);
        assert_eq!(row("x²³.com/①"), [9, 1, 0, 0, 0, 0, 1, 3, 0, 0, 0, 2, 7]);
    }

    #[test]
    fn unicode_separators_trimmed() {
        assert_eq!(
            row("\u{1f}example.tk\u{1f}"),
            [10, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 10]
        );
        assert_eq!(
            row("\u{1c}\u{1d} http://a.b/c \u{1e}\u{3000}"),
            [12, 1, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2, 3]
        );
        assert_eq!(
            row("\u{a0}login-verify.top/\u{2003}"),
            [17, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 16]
        );
    }

    #[test]
    fn idn_hosts_lowercased_by_character() {
        assert_eq!(
            row("https://пример.рф/путь?q=١٢"),
            [27, 1, 0, 0, 1, 1, 3, 2, 0, 1, 0, 5, 9]
        );
        assert_eq!(
            row("HTTP://BÜCHER.DE/Straße"),
            [23, 1, 0, 0, 0, 0, 3, 0, 0, 0, 0, 7, 9]
        );
        // Lower-casing `İ` yields two characters.
        assert_eq!(
            row("http://İstanbul.com/İ"),
            [21, 1, 0, 0, 0, 0, 3, 0, 0, 0, 0, 3, 13]
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let url = "http://secure-login.paypal.com.verify-account.top/signin?id=42&next=/home";
        assert_eq!(extract_features(url), extract_features(url));
    }
}
