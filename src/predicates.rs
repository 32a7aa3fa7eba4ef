//! Predicates over strings and string sets.

use crate::delimiters::Delimiters;
use crate::numeric::{is_numeric, DECIMAL_SEPARATOR};

/// Case-sensitive equality.
pub fn same_str(s1: &str, s2: &str) -> bool {
    s1 == s2
}

/// Same as [`same_str`].
pub fn comp_str(s1: &str, s2: &str) -> bool {
    same_str(s1, s2)
}

/// Equality after lower-casing both sides.
pub fn same_text(s1: &str, s2: &str) -> bool {
    same_str(&s1.to_lowercase(), &s2.to_lowercase())
}

/// True when `s` is empty or consists only of `empty_chars`.
///
/// With [`Delimiters::default`] the empty characters are whitespace.
pub fn is_empty_str(s: &str, empty_chars: impl Into<Delimiters>) -> bool {
    if s.is_empty() {
        return true;
    }
    !empty_chars.into().matcher().has_word(s)
}

pub fn is_integer(s: &str) -> bool {
    is_numeric(s) && !s.contains(DECIMAL_SEPARATOR)
}

pub fn is_float(s: &str) -> bool {
    is_numeric(s) && s.contains(DECIMAL_SEPARATOR)
}

/// Whether every element of `left` also appears in `right`.
pub fn is_subset<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    left.iter().all(|item| right.contains(item))
}
