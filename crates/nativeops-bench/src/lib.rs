//! Benchmark workloads for the nativeops primitives.
//!
//! Every builder is deterministic, so runs are comparable across machines
//! and commits:
//!
//! - [`sort_workloads`]: the quicksort's best, typical and worst inputs
//! - [`ascii_text`]: printable ASCII of a given length, no terminator
//! - [`c_text`]: the same text NUL-terminated, for the buffer-checked API

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nativeops_test_utils::{ascending, descending, scrambled};

/// Seed shared by every pseudo-random workload.
pub const BENCH_SEED: u64 = 42;

/// Named sort inputs of length `n`.
///
/// Ascending and descending input are the last-element-pivot worst case
/// (quadratic comparisons); scrambled input is the typical case.
pub fn sort_workloads(n: usize) -> Vec<(&'static str, Vec<i64>)> {
    vec![
        ("scrambled", scrambled(n, BENCH_SEED)),
        ("ascending", ascending(n)),
        ("descending", descending(n)),
    ]
}

/// `len` bytes of printable ASCII, mixed case, no NUL.
pub fn ascii_text(len: usize) -> Vec<u8> {
    let mut state = BENCH_SEED;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            b' ' + ((state >> 33) % 95) as u8
        })
        .collect()
}

/// [`ascii_text`] followed by a NUL terminator.
pub fn c_text(len: usize) -> Vec<u8> {
    let mut text = ascii_text(len);
    text.push(0);
    text
}
