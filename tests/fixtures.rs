//! Table-driven checks of the edge-case contract.
//!
//! Each case pins one documented behavior: clamping of out-of-range
//! positions, unbounded extents, delimiter handling and so on.

use qstr::*;
use rstest::rstest;

#[rstest]
#[case("abc", 0, "abc")]
#[case("abc", 1, "bc")]
#[case("abc", 3, "")]
#[case("abc", 99, "")]
fn copy_from_clamps(#[case] s: &str, #[case] start: usize, #[case] expected: &str) {
    assert_eq!(copy_from(s, start), expected);
}

#[rstest]
#[case("abc", Extent::Chars(0), "", "")]
#[case("abc", Extent::Chars(1), "a", "c")]
#[case("abc", Extent::Chars(3), "abc", "abc")]
#[case("abc", Extent::Unbounded, "abc", "abc")]
#[case("", Extent::Unbounded, "", "")]
fn copy_left_and_right(
    #[case] s: &str,
    #[case] count: Extent,
    #[case] left: &str,
    #[case] right: &str,
) {
    assert_eq!(copy_left(s, count), left);
    assert_eq!(copy_right(s, count), right);
}

#[rstest]
#[case("abc", 0, Extent::Chars(0), "a")]
#[case("abc", 0, Extent::Chars(1), "ab")]
#[case("abc", 1, Extent::Unbounded, "bc")]
#[case("", 0, Extent::Unbounded, "")]
#[case("abcdef", 4, Extent::Chars(1), "")]
fn copy_range_is_inclusive(
    #[case] s: &str,
    #[case] start: usize,
    #[case] stop: Extent,
    #[case] expected: &str,
) {
    assert_eq!(copy_range(s, start, stop), expected);
}

#[rstest]
#[case(1, "a,b,,c", ",", "a")]
#[case(3, "a,b,,c", ",", "c")]
#[case(4, "a,b,,c", ",", "")]
#[case(2, "key = value; other", "=;", " value")]
#[case(1, "", ",", "")]
fn get_word_n_by_character_set(
    #[case] n: usize,
    #[case] s: &str,
    #[case] delimiters: &str,
    #[case] expected: &str,
) {
    assert_eq!(get_word_n(n, s, delimiters), expected);
}

#[rstest]
#[case("aaa.bbb", 1, "aaa")]
#[case("aaa.bbb", 0, "aaa")]
#[case("aaa.bbb", 6, "bbb")]
#[case("aaa.bbb.ccc", 5, "bbb")]
#[case("aaa.bbb.ccc", 3, "")]
#[case("aaa..bbb", 4, "")]
#[case("", 0, "")]
fn word_at_pos_returns_the_surrounding_word(
    #[case] s: &str,
    #[case] pos: usize,
    #[case] expected: &str,
) {
    assert_eq!(word_at_pos(s, pos, "."), expected);
}

#[rstest]
#[case("  key=value", "=", "  key", "=value")]
#[case("first second", " ", "first", " second")]
#[case("Ab ab", " ", "Ab", " ab")]
#[case("x=xx", "=", "x", "=xx")]
fn str_tok_deletes_the_token_text(
    #[case] s: &str,
    #[case] delimiters: &str,
    #[case] tok: &str,
    #[case] rest: &str,
) {
    let pair = str_tok(s, delimiters);
    assert_eq!(pair.tok, tok);
    assert_eq!(pair.str, rest);
}

#[rstest]
#[case("", true)]
#[case(" \t\n", true)]
#[case("a", false)]
#[case(" a ", false)]
fn is_empty_str_with_whitespace(#[case] s: &str, #[case] expected: bool) {
    assert_eq!(is_empty_str(s, Delimiters::default()), expected);
}

#[rstest]
#[case("1", true, false)]
#[case("-5", true, false)]
#[case("1e4", true, false)]
#[case("0x1f", true, false)]
#[case("1.0", false, true)]
#[case(".5", false, true)]
#[case("5.", false, true)]
#[case("1.5e3", false, true)]
#[case("", false, false)]
#[case("abc", false, false)]
#[case("Infinity", false, false)]
#[case("1.2.3", false, false)]
fn classifies_numeric_literals(
    #[case] s: &str,
    #[case] integer: bool,
    #[case] float: bool,
) {
    assert_eq!(is_integer(s), integer, "is_integer({s:?})");
    assert_eq!(is_float(s), float, "is_float({s:?})");
}

#[rstest]
#[case("0", Some(0))]
#[case(" 42 ", Some(42))]
#[case("-17", Some(-17))]
#[case("10e1", Some(10))]
#[case("0x10", Some(0))]
#[case("1.5", None)]
#[case("twelve", None)]
fn str_to_int_is_soft(#[case] s: &str, #[case] expected: Option<i64>) {
    assert_eq!(str_to_int(s), expected);
}

#[rstest]
#[case("ff", 255)]
#[case("0XFF", 255)]
#[case("+0x7fffffff", 0x7fff_ffff)]
#[case("12 34", 0x12)]
fn hex_to_uint_reads_leading_digits(#[case] s: &str, #[case] expected: u32) {
    assert_eq!(hex_to_uint(s), Ok(expected));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("zz")]
#[case("-1")]
#[case("1ffffffff")]
fn hex_to_uint_fails_hard(#[case] s: &str) {
    let err = hex_to_uint(s).unwrap_err();
    assert_eq!(err.input(), s);
    assert!(err.to_string().starts_with("Hex to int failed"));
}

#[rstest]
#[case(0xabc, 6, "000abc")]
#[case(0xabc, 3, "abc")]
#[case(0xabc, 2, "bc")]
#[case(u32::MAX, 4, "ffff")]
fn uint_to_hex_pads_or_truncates(#[case] n: u32, #[case] digits: usize, #[case] expected: &str) {
    assert_eq!(uint_to_hex(n, digits), expected);
}

#[rstest]
#[case("Hello World", "o", "0", 0, "Hell0 W0rld")]
#[case("Hello World", "o", "0", 5, "Hello W0rld")]
#[case("Hello World", "O", "0", 0, "Hello World")]
#[case("a.b.c", ".", "", 0, "abc")]
fn replace_str_from_position(
    #[case] s: &str,
    #[case] find: &str,
    #[case] replacement: &str,
    #[case] start_pos: usize,
    #[case] expected: &str,
) {
    assert_eq!(replace_str(s, find, replacement, start_pos), expected);
}

#[test]
fn character_sets_and_patterns_agree() {
    let pattern = regex::Regex::new(r"[^,;]+").unwrap();
    let s = "alpha,beta;;gamma";
    for n in 1..=4 {
        assert_eq!(
            get_word_n(n, s, ",;"),
            get_word_n(n, s, Delimiters::Pattern(pattern.clone()))
        );
    }
    assert_eq!(
        word_at_pos(s, 7, ",;"),
        word_at_pos(s, 7, Delimiters::Pattern(pattern))
    );
}
