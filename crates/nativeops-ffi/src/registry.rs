//! Ownership table for buffers handed out by `allocate_string`.
//!
//! C callers only ever see the buffer's address. The table keys each live
//! [`ByteBuffer`] by that address, so `free_string` can tell a pointer it
//! issued from a foreign one and release it exactly once.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use nativeops_core::ByteBuffer;

static BUFFERS: LazyLock<Mutex<IndexMap<usize, ByteBuffer>>> =
    LazyLock::new(|| Mutex::new(IndexMap::new()));

// A panic while holding the lock cannot leave the map half-updated, so a
// poisoned lock is still safe to use.
fn buffers() -> MutexGuard<'static, IndexMap<usize, ByteBuffer>> {
    BUFFERS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Take ownership of `buffer` and return the address C will use for it.
///
/// The heap block behind a `ByteBuffer` does not move when the buffer
/// itself is moved into the table, so the pointer stays valid until
/// [`release`].
pub(crate) fn insert(mut buffer: ByteBuffer) -> *mut u8 {
    let ptr = buffer.as_mut_ptr();
    buffers().insert(ptr as usize, buffer);
    ptr
}

/// Drop the buffer issued at `ptr`. Returns `false` if `ptr` was never
/// issued or has already been released.
pub(crate) fn release(ptr: *mut u8) -> bool {
    buffers().swap_remove(&(ptr as usize)).is_some()
}

/// Whether `ptr` is a live buffer from this table.
#[cfg(test)]
pub(crate) fn contains(ptr: *const u8) -> bool {
    buffers().contains_key(&(ptr as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_release() {
        let ptr = insert(ByteBuffer::allocate(16).unwrap());
        assert!(contains(ptr));
        assert!(release(ptr));
        assert!(!contains(ptr));
    }

    #[test]
    fn double_release_is_rejected() {
        let ptr = insert(ByteBuffer::allocate(4).unwrap());
        assert!(release(ptr));
        assert!(!release(ptr));
    }

    #[test]
    fn foreign_pointer_is_rejected() {
        let mut local = [0u8; 8];
        assert!(!release(local.as_mut_ptr()));
    }

    #[test]
    fn live_buffers_have_distinct_addresses() {
        let a = insert(ByteBuffer::allocate(8).unwrap());
        let b = insert(ByteBuffer::allocate(8).unwrap());
        assert_ne!(a, b);
        assert!(release(a));
        assert!(release(b));
    }
}
