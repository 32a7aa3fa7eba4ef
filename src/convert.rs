//! Conversions between text and integers.
//!
//! Two failure styles coexist here on purpose: [`hex_to_uint`] fails hard with a
//! [`ConvertError`], while [`str_to_int`] and [`str_to_uint`] fail soft and
//! return `None`.

use crate::error::ConvertError;
use crate::numeric::leading_int;
use crate::predicates::is_integer;
use crate::slice::copy_right;

/// Parse hexadecimal text.
///
/// Leading whitespace, a `+` sign and a `0x` prefix are skipped; then the
/// longest run of hex digits is read and anything after it ignored.
pub fn hex_to_uint(s: &str) -> Result<u32, ConvertError> {
    let t = s.trim_start();
    if t.starts_with('-') {
        tracing::debug!(input = s, "negative hex value");
        return Err(ConvertError::Negative(s.to_string()));
    }
    let t = t.strip_prefix('+').unwrap_or(t);
    let t = t
        .strip_prefix("0x")
        .or_else(|| t.strip_prefix("0X"))
        .unwrap_or(t);

    let digits = t.len() - t.trim_start_matches(|c: char| c.is_ascii_hexdigit()).len();
    if digits == 0 {
        tracing::debug!(input = s, "no hex digits");
        return Err(ConvertError::NoHexDigits(s.to_string()));
    }
    u32::from_str_radix(&t[..digits], 16).map_err(|_| {
        tracing::debug!(input = s, "hex value overflows u32");
        ConvertError::Overflow(s.to_string())
    })
}

pub fn int_to_str(n: i64) -> String {
    n.to_string()
}

/// Lower-case hex of `n`, zero-padded to `digits`. A representation longer
/// than `digits` keeps only its rightmost `digits` characters.
pub fn uint_to_hex(n: u32, digits: usize) -> String {
    let hex = format!("{:x}", n);
    if hex.len() > digits {
        copy_right(&hex, digits)
    } else {
        format!("{:0>width$}", hex, width = digits)
    }
}

/// Integer value of `s`, or `None` when `s` is not an integer literal.
///
/// Only the leading decimal digits count, so `"10e1"` reads as 10.
pub fn str_to_int(s: &str) -> Option<i64> {
    if !is_integer(s) {
        return None;
    }
    leading_int(s)
}

/// Like [`str_to_int`], but negative values are rejected.
pub fn str_to_uint(s: &str) -> Option<u64> {
    str_to_int(s).and_then(|n| u64::try_from(n).ok())
}
