//! Single-bit operations on 32-bit integers.
//!
//! Bit 0 is the least significant. Shift counts use 32-bit wrapping semantics,
//! so an `index` of 32 addresses bit 0 again, in all three operations alike.

/// Clear bit `index` of `num`.
pub fn bit_reset(num: i32, index: u32) -> i32 {
    num & !1i32.wrapping_shl(index)
}

/// Set bit `index` of `num`.
pub fn bit_set(num: i32, index: u32) -> i32 {
    num | 1i32.wrapping_shl(index)
}

/// Whether bit `index` of `num` is set.
///
/// The value is shifted arithmetically, so bit 31 of a negative number reads
/// as set just like any other position.
pub fn bit_test(num: i32, index: u32) -> bool {
    num.wrapping_shr(index) & 1 != 0
}

/// Index of the lowest set bit at or above `first_bit`, if any.
pub fn set_bit_scan_forward(num: i32, first_bit: u32) -> Option<u32> {
    (first_bit..32).find(|&i| bit_test(num, i))
}
