//! Reference callables with known growth, measured by the `bigo` binary.

use std::hint::black_box;

/// O(1): first element.
pub fn first(values: &[i64]) -> Option<i64> {
    values.first().copied()
}

/// O(n): wrapping sum.
pub fn sum(values: &[i64]) -> i64 {
    values
        .iter()
        .fold(0i64, |acc, &v| black_box(acc.wrapping_add(v)))
}

/// O(n log n): sorted copy.
pub fn sorted(values: &[i64]) -> Vec<i64> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out
}

/// O(log n): binary search for a third of the length in a sorted slice.
pub fn search_sorted(values: &[i64]) -> bool {
    let needle = values.len() as i64 / 3;
    values.binary_search(&needle).is_ok()
}

/// O(n²): number of index pairs `i < j` with `values[i] < values[j]`.
pub fn count_pairs(values: &[i64]) -> u64 {
    let mut count = 0u64;
    for (i, &a) in values.iter().enumerate() {
        for &b in &values[i + 1..] {
            if black_box(a < b) {
                count += 1;
            }
        }
    }
    count
}

/// O(n³): number of index triples `i < j < k` summing to zero.
pub fn count_zero_triples(values: &[i64]) -> u64 {
    let mut count = 0u64;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            for k in j + 1..values.len() {
                if black_box(values[i].wrapping_add(values[j]).wrapping_add(values[k]) == 0) {
                    count += 1;
                }
            }
        }
    }
    count
}
