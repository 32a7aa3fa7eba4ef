//! # qstr
//!
//! Deterministic string, bit and array utilities in the style of the classic
//! `Q_` string routines.
//!
//! Every function is pure: inputs are borrowed, results are new values, and
//! nothing is cached between calls except compiled default patterns. Text
//! positions and lengths count `char`s.
//!
//! Bad input degrades instead of failing. Out-of-range positions produce empty
//! or unchanged strings, and missing matches produce `None`. Only two
//! operations can fail:
//!
//! - [`hex_to_uint`] returns a [`ConvertError`]
//! - [`str_to_int`] and [`str_to_uint`] return `None` for text that is not an
//!   integer
//!
//! ## Delimiters and extents
//!
//! Tokenizing functions take anything convertible into [`Delimiters`]: a string
//! of separator characters, a single `char`, or a [`regex::Regex`] matching
//! words. Counts and positions that may mean "to the end" take an [`Extent`];
//! plain `usize` values convert into one.

pub mod arrays;
pub mod bits;
pub mod convert;
pub mod delimiters;
pub mod edit;
pub mod error;
pub mod extent;
pub mod hash;
pub mod numeric;
pub mod predicates;
pub mod search;
pub mod slice;
pub mod tokenize;

pub use arrays::{rem_duplicates, sort};
pub use bits::{bit_reset, bit_set, bit_test, set_bit_scan_forward};
pub use convert::{hex_to_uint, int_to_str, str_to_int, str_to_uint, uint_to_hex};
pub use delimiters::{Delimiters, WordMatcher};
pub use edit::{
    del_chars, delete, delete_first_match, delete_first_str, delete_first_text, lower_case,
    pad_right, replace_first_str, replace_matches, replace_str, replace_text, space_compress,
    trim, trim_left, upper_case, Scope,
};
pub use error::ConvertError;
pub use extent::Extent;
pub use hash::crc32;
pub use numeric::DECIMAL_SEPARATOR;
pub use predicates::{comp_str, is_empty_str, is_float, is_integer, is_subset, same_str, same_text};
pub use search::{char_count, pos_last_str, pos_str};
pub use slice::{copy_from, copy_left, copy_range, copy_right};
pub use tokenize::{get_word_n, str_tok, str_tok1, table_pos_text, word_at_pos, TokenPair};
