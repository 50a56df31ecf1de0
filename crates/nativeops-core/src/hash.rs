//! FNV-1a 64-bit hashing of terminated byte spans.
//!
//! Not cryptographically secure. Used for fast, deterministic
//! fingerprints of short strings.

use crate::text::terminated;

/// FNV-1a offset basis for 64-bit.
pub const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a prime for 64-bit.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
}

/// Hash `bytes` up to the slice end or the first NUL, whichever comes first.
///
/// The empty span hashes to [`FNV_OFFSET`].
///
/// ```
/// use nativeops_core::hash::{fnv1a, FNV_OFFSET};
/// assert_eq!(fnv1a(b""), FNV_OFFSET);
/// assert_eq!(fnv1a(b"abc\0def"), fnv1a(b"abc"));
/// ```
pub fn fnv1a(bytes: &[u8]) -> u64 {
    terminated(bytes)
        .iter()
        .fold(FNV_OFFSET, |hash, &b| fnv1a_byte(hash, b))
}
