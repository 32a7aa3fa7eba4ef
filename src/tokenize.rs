//! Word extraction.
//!
//! Words are whatever the [`Delimiters`] matcher says they are: runs of chars
//! outside a separator set, or matches of a word pattern. The default splits on
//! whitespace.

use crate::delimiters::Delimiters;
use crate::edit::delete_first_text;
use crate::slice::{copy_from, copy_range};
use serde::{Deserialize, Serialize};

/// A token split off the front of a string, and what is left of the string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub tok: String,
    pub str: String,
}

/// The `n`th word of `s`, counting from 1. Empty when there is no such word.
pub fn get_word_n(n: usize, s: &str, delimiters: impl Into<Delimiters>) -> String {
    if n == 0 {
        return String::new();
    }
    let matcher = delimiters.into().matcher();
    matcher
        .words(s)
        .get(n - 1)
        .map(|w| w.to_string())
        .unwrap_or_default()
}

/// Split the first word off `s`.
///
/// The remainder is `s` with the first case-insensitive occurrence of the
/// token text removed, so leading delimiters stay in `str`:
/// `str_tok("a = b", "=")` gives `tok: "a "`, `str: "= b"`.
pub fn str_tok(s: &str, delimiters: impl Into<Delimiters>) -> TokenPair {
    let matcher = delimiters.into().matcher();
    let tok = matcher.words(s).first().copied().unwrap_or_default();
    TokenPair {
        tok: tok.to_string(),
        str: delete_first_text(s, tok, 0),
    }
}

/// [`str_tok`], also dropping the delimiter that followed the token.
pub fn str_tok1(s: &str, delimiters: impl Into<Delimiters>) -> TokenPair {
    let TokenPair { tok, str: rest } = str_tok(s, delimiters);
    TokenPair {
        tok,
        str: copy_from(&rest, 1),
    }
}

/// Alias of [`str_tok1`] kept for table-reading callers.
pub fn table_pos_text(s: &str, delimiters: impl Into<Delimiters>) -> TokenPair {
    str_tok1(s, delimiters)
}

/// The word covering char `pos` of `s`.
///
/// Empty when `pos` is out of range or lands on a delimiter.
pub fn word_at_pos(s: &str, pos: usize, delimiters: impl Into<Delimiters>) -> String {
    let matcher = delimiters.into().matcher();
    let chars: Vec<char> = s.chars().collect();
    match chars.get(pos) {
        Some(&c) if matcher.is_word_char(c) => {}
        _ => return String::new(),
    }

    let first = chars[..pos]
        .iter()
        .rposition(|&c| !matcher.is_word_char(c))
        .map_or(0, |i| i + 1);
    let last = chars[pos..]
        .iter()
        .position(|&c| !matcher.is_word_char(c))
        .map_or(chars.len(), |i| pos + i)
        - 1;
    copy_range(s, first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_word_n() {
        assert_eq!(get_word_n(3, "ab\t\tcd ab", Delimiters::default()), "ab");
        assert_eq!(get_word_n(1, "", Delimiters::default()), "");
        assert_eq!(get_word_n(3, "ab cd", Delimiters::default()), "");
        assert_eq!(get_word_n(1, "ab cd", "c"), "ab ");
        assert_eq!(get_word_n(2, "ab cd", "c"), "d");
        assert_eq!(get_word_n(0, "ab cd", Delimiters::default()), "");
    }

    #[test]
    fn test_str_tok() {
        assert_eq!(str_tok("", Delimiters::default()), TokenPair::default());
        let pair = str_tok("a b", Delimiters::default());
        assert_eq!((pair.tok.as_str(), pair.str.as_str()), ("a", " b"));
        let pair = str_tok("a = b", "=");
        assert_eq!((pair.tok.as_str(), pair.str.as_str()), ("a ", "= b"));
    }

    #[test]
    fn str_tok_without_words_keeps_the_input() {
        let pair = str_tok("   ", Delimiters::default());
        assert_eq!(pair.tok, "");
        assert_eq!(pair.str, "   ");
    }

    #[test]
    fn test_str_tok1() {
        assert_eq!(str_tok1("", Delimiters::default()), TokenPair::default());
        let pair = str_tok1("a c", Delimiters::default());
        assert_eq!((pair.tok.as_str(), pair.str.as_str()), ("a", "c"));
        let pair = str_tok1("a = b", "=");
        assert_eq!((pair.tok.as_str(), pair.str.as_str()), ("a ", " b"));
        assert_eq!(table_pos_text("a = b", "="), pair);
    }

    #[test]
    fn test_word_at_pos() {
        assert_eq!(word_at_pos("aaa.bbb", 1, "."), "aaa");
        assert_eq!(word_at_pos("aaa.bbb.ccc", 5, "."), "bbb");
        assert_eq!(word_at_pos("aaa.bbb.ccc", 3, "."), "");
        assert_eq!(word_at_pos("aaa.bbb.ccc", 10, "."), "ccc");
        assert_eq!(word_at_pos("aaa.bbb.ccc", 11, "."), "");
        assert_eq!(word_at_pos("one two", 5, Delimiters::default()), "two");
    }
}
