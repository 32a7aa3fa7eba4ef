//! Substring search. Results are char indices.

use crate::extent::{byte_offset, char_index, char_len, Extent};

/// Char index of the first `find` in `source` at or after `start_pos`.
pub fn pos_str(find: &str, source: &str, start_pos: usize) -> Option<usize> {
    if source.is_empty() {
        return None;
    }
    let from = byte_offset(source, start_pos);
    source[from..]
        .find(find)
        .map(|i| char_index(source, from + i))
}

/// Char index of the last `find` in `source` that starts before `last_pos`.
///
/// A `last_pos` of 0 still allows a match at index 0. [`Extent::Unbounded`]
/// searches the whole string.
pub fn pos_last_str(find: &str, source: &str, last_pos: impl Into<Extent>) -> Option<usize> {
    if source.is_empty() {
        return None;
    }
    let len = char_len(source);
    let from_index = last_pos.into().clamp_to(len + 1).saturating_sub(1);
    let limit = byte_offset(source, from_index);
    (0..=limit)
        .rev()
        .filter(|&i| source.is_char_boundary(i))
        .find(|&i| source[i..].starts_with(find))
        .map(|i| char_index(source, i))
}

/// Number of non-overlapping occurrences of `sub` in `s`.
pub fn char_count(s: &str, sub: &str) -> usize {
    if sub.is_empty() {
        return 0;
    }
    s.matches(sub).count()
}
