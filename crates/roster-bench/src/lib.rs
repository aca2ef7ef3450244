//! Benchmark fixtures for the roster container.
//!
//! Provides deterministic builders so benchmark runs are comparable:
//!
//! - [`filled`]: ascending values, exercising append and search paths
//! - [`shuffled`]: a seeded permutation, exercising sort and insert paths

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use roster::Roster;

/// A container holding `0..n` in ascending order.
pub fn filled(n: usize) -> Roster<u64> {
    (0..n as u64).collect()
}

/// A container holding a deterministic permutation of `0..n`.
///
/// Uses a fixed-seed linear congruential generator for the Fisher-Yates
/// swaps, so every call with the same `n` produces the same order.
pub fn shuffled(n: usize) -> Roster<u64> {
    let mut values = filled(n);
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let items = values.as_mut_slice();
    for i in (1..items.len()).rev() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let j = (state % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
    values
}
