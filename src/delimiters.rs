//! Word delimiters for the tokenizing functions.
//!
//! A [`Delimiters`] value is either a set of separator characters or a compiled
//! regex that matches *words*. Plain strings always convert to a character set:
//! `"=,"` means "split on `=` or `,`", never the substring `"=,"`.
//!
//! Every tokenizing function turns its `Delimiters` argument into a
//! [`WordMatcher`] once on entry and works only through that.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Words are runs of non-whitespace.
pub static WHITESPACE_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s]+").unwrap());

#[derive(Debug, Clone)]
pub enum Delimiters {
    /// Each character of the string separates words
    Chars(String),
    /// The regex matches the words themselves
    Pattern(Regex),
}

impl Delimiters {
    pub fn whitespace() -> Self {
        Delimiters::Pattern(WHITESPACE_WORDS.clone())
    }

    pub fn matcher(&self) -> WordMatcher {
        match self {
            Delimiters::Chars(chars) => WordMatcher::Separators(chars.chars().collect()),
            Delimiters::Pattern(re) => WordMatcher::Words(re.clone()),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::whitespace()
    }
}

impl From<&str> for Delimiters {
    fn from(chars: &str) -> Self {
        Delimiters::Chars(chars.to_string())
    }
}

impl From<String> for Delimiters {
    fn from(chars: String) -> Self {
        Delimiters::Chars(chars)
    }
}

impl From<char> for Delimiters {
    fn from(ch: char) -> Self {
        Delimiters::Chars(ch.to_string())
    }
}

impl From<Regex> for Delimiters {
    fn from(re: Regex) -> Self {
        Delimiters::Pattern(re)
    }
}

impl From<&Delimiters> for Delimiters {
    fn from(delimiters: &Delimiters) -> Self {
        delimiters.clone()
    }
}

/// Resolved form of [`Delimiters`].
#[derive(Debug, Clone)]
pub enum WordMatcher {
    Separators(HashSet<char>),
    Words(Regex),
}

impl WordMatcher {
    /// All words of `s`, in order.
    pub fn words<'s>(&self, s: &'s str) -> Vec<&'s str> {
        match self {
            WordMatcher::Separators(set) => s
                .split(|c: char| set.contains(&c))
                .filter(|w| !w.is_empty())
                .collect(),
            WordMatcher::Words(re) => re.find_iter(s).map(|m| m.as_str()).collect(),
        }
    }

    pub fn is_word_char(&self, c: char) -> bool {
        match self {
            WordMatcher::Separators(set) => !set.contains(&c),
            WordMatcher::Words(re) => re.is_match(c.encode_utf8(&mut [0; 4])),
        }
    }

    /// Whether `s` holds at least one word.
    pub fn has_word(&self, s: &str) -> bool {
        match self {
            WordMatcher::Separators(_) => s.chars().any(|c| self.is_word_char(c)),
            WordMatcher::Words(re) => re.is_match(s),
        }
    }
}
