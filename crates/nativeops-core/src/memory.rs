//! Span copy/compare and scope-bound byte buffers.
//!
//! [`ByteBuffer`] replaces the manual allocate/free pair: the allocation
//! lives exactly as long as the value and is released on drop.

use std::cmp::Ordering;

use crate::error::{OpsError, OpsResult};
use crate::text;

/// Copy all of `src` into the front of `dst`.
///
/// Fails with [`OpsError::BufferTooSmall`] if `dst` is shorter than `src`;
/// `dst` is untouched in that case.
pub fn copy(dst: &mut [u8], src: &[u8]) -> OpsResult<()> {
    if dst.len() < src.len() {
        return Err(OpsError::BufferTooSmall {
            needed: src.len(),
            capacity: dst.len(),
        });
    }
    dst[..src.len()].copy_from_slice(src);
    Ok(())
}

/// Three-way lexicographic comparison of two byte spans.
///
/// For equal-length spans this is exactly the ordering `memcmp` reports.
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// An owned, zero-initialised, fixed-capacity byte buffer.
///
/// Capacity is set at allocation and never changes, so every write is
/// checked against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Box<[u8]>,
}

impl ByteBuffer {
    /// Allocate `size` zeroed bytes.
    ///
    /// Uses fallible reservation, so an impossible size is reported as
    /// [`OpsError::AllocationFailed`] instead of aborting the process.
    pub fn allocate(size: usize) -> OpsResult<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| OpsError::AllocationFailed { size })?;
        bytes.resize(size, 0);
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// The whole buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The whole buffer, mutably.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Raw pointer to the first byte, for handing across the C ABI.
    ///
    /// The pointer stays valid until the buffer is dropped; moving the
    /// `ByteBuffer` does not move its heap allocation.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }

    /// Contents before the first NUL.
    pub fn terminated(&self) -> &[u8] {
        text::terminated(&self.bytes)
    }

    /// Store `value` followed by a NUL terminator.
    pub fn write_terminated(&mut self, value: &[u8]) -> OpsResult<()> {
        let needed = value.len() + 1;
        if self.bytes.len() < needed {
            return Err(OpsError::BufferTooSmall {
                needed,
                capacity: self.bytes.len(),
            });
        }
        self.bytes[..value.len()].copy_from_slice(value);
        self.bytes[value.len()] = 0;
        Ok(())
    }
}
