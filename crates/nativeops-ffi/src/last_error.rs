//! Last-error slot for the `mathlib` symbols.
//!
//! Every failing `mathlib` call overwrites the slot with
//! `"<operation>: <reason>"`; successful calls leave it alone, so an old
//! message says nothing about the most recent call. Success is decided by
//! the return value only.
//!
//! The slot is a fixed `LAST_ERROR_CAPACITY`-byte buffer held in
//! thread-local storage. C callers read it through `get_last_error`, which
//! hands out a pointer into this buffer; the pointer stays valid for the
//! life of the thread and sees each later overwrite.

use std::cell::RefCell;
use std::ffi::c_char;
use std::fmt;

use nativeops_core::text::terminated;

/// Size of the slot in bytes, terminator included.
pub const LAST_ERROR_CAPACITY: usize = 256;

thread_local! {
    static LAST_ERROR: RefCell<[u8; LAST_ERROR_CAPACITY]> =
        const { RefCell::new([0; LAST_ERROR_CAPACITY]) };
}

/// Overwrite this thread's slot with `"{operation}: {reason}"`, truncated
/// to `LAST_ERROR_CAPACITY - 1` bytes at a character boundary.
pub(crate) fn record(operation: &str, reason: &dyn fmt::Display) {
    let message = format!("{operation}: {reason}");
    let mut len = message.len().min(LAST_ERROR_CAPACITY - 1);
    while !message.is_char_boundary(len) {
        len -= 1;
    }

    LAST_ERROR.with(|slot| {
        let mut slot = slot.borrow_mut();
        slot[..len].copy_from_slice(&message.as_bytes()[..len]);
        slot[len] = 0;
    });
}

/// Pointer to this thread's NUL-terminated slot.
pub(crate) fn as_ptr() -> *const c_char {
    LAST_ERROR.with(|slot| slot.as_ptr().cast::<c_char>().cast_const())
}

/// This thread's current message, empty if nothing has failed yet.
pub fn message() -> String {
    LAST_ERROR.with(|slot| {
        let slot = slot.borrow();
        String::from_utf8_lossy(terminated(&slot[..])).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        std::thread::spawn(|| assert_eq!(message(), ""))
            .join()
            .unwrap();
    }

    #[test]
    fn record_overwrites() {
        record("first", &"one");
        record("second", &"two");
        assert_eq!(message(), "second: two");
    }

    #[test]
    fn long_messages_truncate_to_capacity() {
        let reason = "x".repeat(1000);
        record("op", &reason);
        let m = message();
        assert_eq!(m.len(), LAST_ERROR_CAPACITY - 1);
        assert!(m.starts_with("op: xxx"));
    }

    #[test]
    fn truncation_keeps_utf8_intact() {
        // "op: " is 4 bytes; 'é' is 2 bytes, so byte 255 falls mid-character.
        let reason = "é".repeat(200);
        record("op", &reason);
        let m = message();
        assert_eq!(m.len(), LAST_ERROR_CAPACITY - 2);
        assert!(m.ends_with('é'));
    }

    #[test]
    fn shorter_message_is_terminated() {
        record("op", &"a much longer first message");
        record("op", &"short");
        assert_eq!(message(), "op: short");
    }

    #[test]
    fn slots_are_per_thread() {
        record("main", &"here");
        std::thread::spawn(|| {
            record("worker", &"there");
            assert_eq!(message(), "worker: there");
        })
        .join()
        .unwrap();
        assert_eq!(message(), "main: here");
    }

    #[test]
    fn pointer_is_stable_across_records() {
        let before = as_ptr();
        record("op", &"changed");
        assert_eq!(as_ptr(), before);
    }
}
