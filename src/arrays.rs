//! Integer array helpers. Inputs are never modified.

use std::collections::HashSet;

/// Copy of `arr` without repeated values, in first-occurrence order.
pub fn rem_duplicates(arr: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(arr.len());
    arr.iter().copied().filter(|n| seen.insert(*n)).collect()
}

/// Ascending copy of `arr`.
pub fn sort(arr: &[i32]) -> Vec<i32> {
    let mut sorted = arr.to_vec();
    sorted.sort_unstable();
    sorted
}
