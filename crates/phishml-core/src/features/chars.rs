//! Character classes used by the extractor: what counts as surrounding
//! whitespace and what counts as a digit.

use once_cell::sync::Lazy;
use regex::Regex;

/// Decimal digits of every script plus the other characters carrying a digit
/// value (superscripts, subscripts, circled and parenthesized digits, ...).
static DIGIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[\p{Nd}",
        r"\x{B2}\x{B3}\x{B9}\x{1369}-\x{1371}\x{19DA}",
        r"\x{2070}\x{2074}-\x{2079}\x{2080}-\x{2089}",
        r"\x{2460}-\x{2468}\x{2474}-\x{247C}\x{2488}-\x{2490}",
        r"\x{24EA}\x{24F5}-\x{24FD}\x{24FF}",
        r"\x{2776}-\x{277E}\x{2780}-\x{2788}\x{278A}-\x{2792}",
        r"\x{10A40}-\x{10A43}\x{10E60}-\x{10E68}\x{11052}-\x{1105A}",
        r"\x{1F100}-\x{1F10A}]",
    ))
    .unwrap()
});

/// Unicode whitespace plus the information separators `U+001C..=U+001F`.
pub fn is_url_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// `s` without leading or trailing [`is_url_whitespace`] characters.
pub fn trim_url(s: &str) -> &str {
    s.trim_matches(is_url_whitespace)
}

/// Number of digit characters in `s`.
pub fn count_digits(s: &str) -> u32 {
    saturating_u32(DIGIT.find_iter(s).count())
}

/// Number of characters (Unicode scalar values) in `s`.
pub fn char_len(s: &str) -> u32 {
    saturating_u32(s.chars().count())
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
