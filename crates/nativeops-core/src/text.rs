//! Byte-string transforms.
//!
//! Two conventions coexist:
//!
//! - **Buffer-checked**: [`reverse_into`] and [`uppercase_into`] read a
//!   terminated input and write the result plus a NUL terminator into a
//!   separate output slice, failing with [`OpsError::BufferTooSmall`] when
//!   the output cannot hold `len + 1` bytes.
//! - **In place**: [`reverse_in_place`] and [`uppercase_in_place`] mutate a
//!   caller-owned slice and cannot fail.
//!
//! Uppercasing is ASCII-only, matching the C locale.

use crate::error::{OpsError, OpsResult};

/// Number of bytes before the first NUL, or the whole slice if it has none.
pub fn terminated_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// The terminated prefix of `bytes`.
pub fn terminated(bytes: &[u8]) -> &[u8] {
    &bytes[..terminated_len(bytes)]
}

/// Check that `output` can hold `len` bytes plus a terminator.
fn check_capacity(len: usize, output: &[u8]) -> OpsResult<()> {
    let needed = len + 1;
    if output.len() < needed {
        return Err(OpsError::BufferTooSmall {
            needed,
            capacity: output.len(),
        });
    }
    Ok(())
}

/// Write the terminated prefix of `input` reversed into `output`, followed
/// by a NUL. Returns the number of bytes written before the terminator.
///
/// ```
/// use nativeops_core::text::reverse_into;
/// let mut out = [0u8; 6];
/// assert_eq!(reverse_into(b"hello", &mut out), Ok(5));
/// assert_eq!(&out, b"olleh\0");
/// ```
pub fn reverse_into(input: &[u8], output: &mut [u8]) -> OpsResult<usize> {
    let input = terminated(input);
    check_capacity(input.len(), output)?;
    for (dst, &src) in output.iter_mut().zip(input.iter().rev()) {
        *dst = src;
    }
    output[input.len()] = 0;
    Ok(input.len())
}

/// Write the terminated prefix of `input` ASCII-uppercased into `output`,
/// followed by a NUL. Returns the number of bytes written before the
/// terminator.
pub fn uppercase_into(input: &[u8], output: &mut [u8]) -> OpsResult<usize> {
    let input = terminated(input);
    check_capacity(input.len(), output)?;
    for (dst, &src) in output.iter_mut().zip(input) {
        *dst = src.to_ascii_uppercase();
    }
    output[input.len()] = 0;
    Ok(input.len())
}

/// Reverse every byte of `buf`, terminators included.
pub fn reverse_in_place(buf: &mut [u8]) {
    buf.reverse();
}

/// ASCII-uppercase `buf` up to its first NUL; bytes after it are untouched.
pub fn uppercase_in_place(buf: &mut [u8]) {
    let len = terminated_len(buf);
    buf[..len].make_ascii_uppercase();
}
