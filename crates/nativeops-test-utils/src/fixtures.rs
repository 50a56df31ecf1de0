//! Array and string fixtures.

/// Words used by round-trip and hashing tests. Includes an empty string,
/// a palindrome and mixed case.
pub const SAMPLE_WORDS: &[&str] = &[
    "",
    "a",
    "hello",
    "racecar",
    "Hello, World!",
    "MiXeD cAsE 123",
    "the quick brown fox jumps over the lazy dog",
];

/// `0, 1, ..., n - 1`.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// `n - 1, n - 2, ..., 0`.
pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// `n` pseudo-random values in `-1000..1000` from an xorshift generator.
///
/// The same `seed` always yields the same sequence. Values repeat, so
/// sorts see duplicate keys.
pub fn scrambled(n: usize, seed: u64) -> Vec<i64> {
    // xorshift64 has a fixed point at zero.
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 2000) as i64 - 1000
        })
        .collect()
}

/// `s` as a NUL-terminated buffer of exactly `capacity` bytes.
///
/// # Panics
///
/// If `capacity < s.len() + 1`.
pub fn c_buffer(s: &str, capacity: usize) -> Vec<u8> {
    assert!(
        capacity > s.len(),
        "capacity {capacity} cannot hold {:?} plus terminator",
        s
    );
    let mut buf = vec![0u8; capacity];
    buf[..s.len()].copy_from_slice(s.as_bytes());
    buf
}

/// The UTF-8 text before the first NUL of `buf`.
///
/// # Panics
///
/// If that prefix is not valid UTF-8.
pub fn c_str(buf: &[u8]) -> &str {
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    std::str::from_utf8(&buf[..len]).expect("fixture buffer is not UTF-8")
}
