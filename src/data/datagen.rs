//! Synthetic inputs of a requested size.
//!
//! Each factory builds one input for one size. Randomised factories take the
//! RNG explicitly; [`seeded`] wraps one into a `FnMut(u64) -> T` usable as the
//! harness data factory, with a reproducible RNG per size.

use rand::prelude::*;
use rand::rngs::StdRng;

/// `a-zA-Z`
pub const ASCII_LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// The size itself.
pub fn n(size: u64) -> u64 {
    size
}

/// `[start, start + 1, ..., start + size - 1]`, saturating at `i64::MAX`.
pub fn range_n(size: u64, start: i64) -> Vec<i64> {
    (0..size).map(|i| start.saturating_add_unsigned(i)).collect()
}

/// `size` uniform integers in `[min, max]` (inclusive).
///
/// # Panics
/// Panics if `min > max`.
pub fn integers<R: Rng + ?Sized>(size: u64, min: i64, max: i64, rng: &mut R) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(min..=max)).collect()
}

/// `size` large integers spread over roughly ±5e7.
pub fn large_integers<R: Rng + ?Sized>(size: u64, rng: &mut R) -> Vec<i64> {
    (0..size)
        .map(|_| rng.gen_range(-50..=50) * 1_000_000 + rng.gen_range(0..=10_000))
        .collect()
}

/// A string of `size` characters drawn uniformly from `chars`.
///
/// Returns an empty string when `chars` is empty.
pub fn strings<R: Rng + ?Sized>(size: u64, chars: &[char], rng: &mut R) -> String {
    if chars.is_empty() {
        return String::new();
    }
    (0..size)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

/// Turn an RNG-driven factory into a size-only factory.
///
/// The RNG for each size is derived from `(seed, size)`, so the same size
/// always yields the same input.
pub fn seeded<T, F>(seed: u64, mut make: F) -> impl FnMut(u64) -> T
where
    F: FnMut(u64, &mut StdRng) -> T,
{
    move |size| {
        let mut rng = StdRng::seed_from_u64(size_seed(seed, size));
        make(size, &mut rng)
    }
}

/// Fixed golden-ratio mix, stable across toolchains.
fn size_seed(seed: u64, size: u64) -> u64 {
    seed ^ size.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
