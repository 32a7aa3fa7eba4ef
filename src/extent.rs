//! Char counts and positions that may run "to the end" of a string.
//!
//! All slicing in this crate measures text in `char`s, never bytes. The helpers
//! here translate char offsets into byte offsets, clamping anything past the end
//! of the string to its length.

/// A char count or position, or no bound at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    Chars(usize),
    Unbounded,
}

impl Extent {
    /// Resolve against a string holding `len` chars.
    pub fn clamp_to(self, len: usize) -> usize {
        match self {
            Extent::Chars(n) => n.min(len),
            Extent::Unbounded => len,
        }
    }
}

impl From<usize> for Extent {
    fn from(n: usize) -> Self {
        Extent::Chars(n)
    }
}

impl From<Option<usize>> for Extent {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Extent::Unbounded, Extent::Chars)
    }
}

/// Byte offset of the `n`th char of `s`, or `s.len()` when `n` is past the end.
pub(crate) fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Char index of the char starting at byte offset `byte`.
pub(crate) fn char_index(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
