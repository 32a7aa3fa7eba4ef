//! Functions that return an edited copy of a string.
//!
//! All search-and-replace helpers share [`replace_matches`]: the string is split
//! at a char position, only the right part is searched, and the untouched left
//! part is glued back on. Find strings given as `&str` are always literal text;
//! callers who need a pattern pass a [`Regex`] to [`replace_matches`] or
//! [`delete_first_match`] directly.

use crate::extent::{byte_offset, char_len, Extent};
use crate::slice::copy_left;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};
use std::collections::HashSet;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// How many matches a replacement touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    First,
    All,
}

/// Replace matches of `pattern` found at or after char `start_pos`.
///
/// `replacement` is inserted verbatim; `$` has no special meaning.
pub fn replace_matches(
    s: &str,
    pattern: &Regex,
    replacement: &str,
    start_pos: usize,
    scope: Scope,
) -> String {
    let (left, right) = s.split_at(byte_offset(s, start_pos));
    let replaced = match scope {
        Scope::First => pattern.replace(right, NoExpand(replacement)),
        Scope::All => pattern.replace_all(right, NoExpand(replacement)),
    };
    format!("{}{}", left, replaced)
}

/// Remove the first match of `pattern` at or after char `start_pos`.
pub fn delete_first_match(s: &str, pattern: &Regex, start_pos: usize) -> String {
    replace_matches(s, pattern, "", start_pos, Scope::First)
}

fn literal_pattern(find: &str, case_insensitive: bool) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(find))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|err| tracing::warn!(find, %err, "could not build literal matcher"))
        .ok()
}

fn replace_literal(
    s: &str,
    find: &str,
    replacement: &str,
    start_pos: usize,
    scope: Scope,
    case_insensitive: bool,
) -> String {
    match literal_pattern(find, case_insensitive) {
        Some(pattern) => replace_matches(s, &pattern, replacement, start_pos, scope),
        None => s.to_string(),
    }
}

/// Remove every char of `s` that appears in `chars_to_remove`.
pub fn del_chars(s: &str, chars_to_remove: &str) -> String {
    let remove: HashSet<char> = chars_to_remove.chars().collect();
    s.chars().filter(|c| !remove.contains(c)).collect()
}

/// Remove `count` chars starting at char `index`.
pub fn delete(s: &str, index: usize, count: impl Into<Extent>) -> String {
    let len = char_len(s);
    let index = index.min(len);
    let end = match count.into() {
        Extent::Chars(count) => index.saturating_add(count).min(len),
        Extent::Unbounded => len,
    };
    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..byte_offset(s, index)]);
    out.push_str(&s[byte_offset(s, end)..]);
    out
}

/// Remove the first case-insensitive occurrence of `sub_str` at or after `start_pos`.
pub fn delete_first_text(s: &str, sub_str: &str, start_pos: usize) -> String {
    replace_literal(s, sub_str, "", start_pos, Scope::First, true)
}

/// Remove the first occurrence of `sub_str` at or after `start_pos`.
pub fn delete_first_str(s: &str, sub_str: &str, start_pos: usize) -> String {
    replace_literal(s, sub_str, "", start_pos, Scope::First, false)
}

pub fn replace_first_str(s: &str, find: &str, replacement: &str, start_pos: usize) -> String {
    replace_literal(s, find, replacement, start_pos, Scope::First, false)
}

pub fn replace_str(s: &str, find: &str, replacement: &str, start_pos: usize) -> String {
    replace_literal(s, find, replacement, start_pos, Scope::All, false)
}

/// Case-insensitive [`replace_str`].
pub fn replace_text(s: &str, find: &str, replacement: &str, start_pos: usize) -> String {
    replace_literal(s, find, replacement, start_pos, Scope::All, true)
}

/// Trim, then collapse each run of whitespace into a single space.
pub fn space_compress(s: &str) -> String {
    replace_matches(trim(s), &WHITESPACE_RUN, " ", 0, Scope::All)
}

pub fn upper_case(s: &str) -> String {
    s.to_uppercase()
}

pub fn lower_case(s: &str) -> String {
    s.to_lowercase()
}

pub fn trim(s: &str) -> &str {
    s.trim()
}

pub fn trim_left(s: &str) -> &str {
    s.trim_start()
}

/// Pad `s` on the right with `pad_ch` up to `length` chars.
///
/// A longer `s` is cut down to `length` only when `cut` is set.
pub fn pad_right(s: &str, length: usize, pad_ch: char, cut: bool) -> String {
    let len = char_len(s);
    if len == length {
        return s.to_string();
    }
    if len > length {
        return if cut { copy_left(s, length) } else { s.to_string() };
    }
    let mut out = String::with_capacity(s.len() + (length - len) * pad_ch.len_utf8());
    out.push_str(s);
    out.extend(std::iter::repeat(pad_ch).take(length - len));
    out
}
