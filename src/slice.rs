//! Copying sub-ranges out of a string.
//!
//! Positions are 0-based char indices. Out-of-range positions never fail: they
//! clamp to the string, which usually means an empty result.

use crate::extent::{byte_offset, char_len, Extent};

/// Chars from `start` to the end. An unbounded `start` lies past every string,
/// so the result is empty.
pub fn copy_from(s: &str, start: impl Into<Extent>) -> String {
    match start.into() {
        Extent::Chars(start) => s[byte_offset(s, start)..].to_string(),
        Extent::Unbounded => String::new(),
    }
}

/// The first `count` chars.
pub fn copy_left(s: &str, count: impl Into<Extent>) -> String {
    match count.into() {
        Extent::Chars(count) => s[..byte_offset(s, count)].to_string(),
        Extent::Unbounded => s.to_string(),
    }
}

/// The last `count` chars.
pub fn copy_right(s: &str, count: impl Into<Extent>) -> String {
    let len = char_len(s);
    let count = count.into().clamp_to(len);
    s[byte_offset(s, len - count)..].to_string()
}

/// Chars `start` through `stop`, both inclusive.
pub fn copy_range(s: &str, start: usize, stop: impl Into<Extent>) -> String {
    let end = match stop.into() {
        Extent::Chars(stop) if stop < start => return String::new(),
        Extent::Chars(stop) => Extent::Chars(stop.saturating_add(1)),
        Extent::Unbounded => Extent::Unbounded,
    };
    let from = byte_offset(s, start);
    let to = byte_offset(s, end.clamp_to(char_len(s))).max(from);
    s[from..to].to_string()
}
