//! Classification of numeric literals.
//!
//! A string counts as numeric when, after trimming surrounding whitespace, it
//! is one of:
//!
//! - a decimal literal: optional sign, digits with an optional fraction (or a
//!   bare fraction like `.5`), optional exponent
//! - an unsigned `0x`, `0o` or `0b` prefixed integer
//!
//! and its value is finite. Words such as `Infinity` or `NaN` are not numbers.
//! Whether a numeric string is an integer or a float is decided purely by the
//! presence of [`DECIMAL_SEPARATOR`], so `1e4` is an integer.

use once_cell::sync::Lazy;
use regex::Regex;

/// The decimal separator. Fixed, not taken from the locale.
pub const DECIMAL_SEPARATOR: char = '.';

static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

static PREFIXED_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").unwrap());

/// Whether `s` coerces to a finite number.
pub fn is_numeric(s: &str) -> bool {
    let t = s.trim();
    if t.is_empty() {
        return false;
    }
    if PREFIXED_LITERAL.is_match(t) {
        return true;
    }
    DECIMAL_LITERAL.is_match(t) && t.parse::<f64>().map_or(false, f64::is_finite)
}

/// Leading optionally signed decimal digit run of `s`, after skipping leading
/// whitespace. Returns `None` when there are no digits or the value overflows.
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (negative, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let magnitude: i128 = rest[..digits].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}
