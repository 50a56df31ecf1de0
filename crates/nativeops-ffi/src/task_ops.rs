//! `task_ops` symbols: values returned directly, sentinels on failure.
//!
//! No diagnostic message is recorded. The sentinel for each symbol is
//! listed in [`crate::status`]; integer results that legitimately fall in
//! the sentinel range are indistinguishable from failures.

use std::cmp::Ordering;
use std::ffi::{c_char, c_int, c_void};

use nativeops_core::{collection, hash, memory, numeric, text, OpsError};

use crate::status::{TaskOpsCode, COMPARE_ERROR, HASH_NO_INPUT, SQRT_ERROR};

fn sentinel(e: &OpsError) -> i64 {
    TaskOpsCode::from(e).as_i64()
}

/// `n!` for `0 <= n <= 20`, `-1` otherwise.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_factorial(n: i32) -> i64 {
    ffi_guard!(TaskOpsCode::InvalidInput.as_i64(), {
        numeric::factorial_signed(n).unwrap_or_else(|e| sentinel(&e))
    })
}

/// `F(n)`. `-1` for negative `n`, `-3` past `F(92)`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_fibonacci(n: i32) -> i64 {
    ffi_guard!(TaskOpsCode::InvalidInput.as_i64(), {
        numeric::fibonacci(n).unwrap_or_else(|e| sentinel(&e))
    })
}

/// Newton-iteration square root. `-1.0` for negative or NaN input.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_sqrt(x: f64) -> f64 {
    ffi_guard!(SQRT_ERROR, { numeric::sqrt(x).unwrap_or(SQRT_ERROR) })
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`.
///
/// The only result that does not fit `int64_t`, `2^63`, returns `-3`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_gcd(a: i64, b: i64) -> i64 {
    ffi_guard!(TaskOpsCode::Overflow.as_i64(), {
        i64::try_from(numeric::gcd(a, b)).unwrap_or(TaskOpsCode::Overflow.as_i64())
    })
}

/// Wrapping sum of `arr[0..len]`. `-1` for null, `-2` for an empty span.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_array_sum(arr: *const i64, len: usize) -> i64 {
    ffi_guard!(TaskOpsCode::InvalidInput.as_i64(), {
        if arr.is_null() {
            return TaskOpsCode::InvalidInput.as_i64();
        }
        if len == 0 {
            return TaskOpsCode::InvalidSize.as_i64();
        }
        // SAFETY: arr is non-null and points to len readable i64 values.
        let values = unsafe { std::slice::from_raw_parts(arr, len) };
        collection::sum(values)
    })
}

/// Maximum of `arr[0..len]`. `-1` for null, `-2` for an empty span.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_array_max(arr: *const i64, len: usize) -> i64 {
    ffi_guard!(TaskOpsCode::InvalidInput.as_i64(), {
        if arr.is_null() {
            return TaskOpsCode::InvalidInput.as_i64();
        }
        // SAFETY: arr is non-null and points to len readable i64 values.
        let values = unsafe { std::slice::from_raw_parts(arr, len) };
        collection::max(values).unwrap_or_else(|e| sentinel(&e))
    })
}

/// Sort `arr[0..len]` ascending in place. Null or `len <= 1` is a no-op.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_array_sort(arr: *mut i64, len: usize) {
    ffi_guard!((), {
        if arr.is_null() || len <= 1 {
            return;
        }
        // SAFETY: arr is non-null and points to len writable i64 values.
        let values = unsafe { std::slice::from_raw_parts_mut(arr, len) };
        collection::sort(values);
    })
}

/// Reverse the first `len` bytes of `s` in place, terminators included.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_string_reverse(s: *mut c_char, len: usize) {
    ffi_guard!((), {
        if s.is_null() || len <= 1 {
            return;
        }
        // SAFETY: s is non-null and points to len writable bytes.
        let buf = unsafe { std::slice::from_raw_parts_mut(s.cast::<u8>(), len) };
        text::reverse_in_place(buf);
    })
}

/// ASCII-uppercase `s` in place, stopping at `len` bytes or the first NUL.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_string_uppercase(s: *mut c_char, len: usize) {
    ffi_guard!((), {
        if s.is_null() {
            return;
        }
        // SAFETY: s is non-null and points to len writable bytes.
        let buf = unsafe { std::slice::from_raw_parts_mut(s.cast::<u8>(), len) };
        text::uppercase_in_place(buf);
    })
}

/// FNV-1a 64 over `s`, stopping at `len` bytes or the first NUL.
///
/// A null `s` returns `0`, which callers must treat as "no input".
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_string_hash(s: *const c_char, len: usize) -> u64 {
    ffi_guard!(HASH_NO_INPUT, {
        if s.is_null() {
            return HASH_NO_INPUT;
        }
        // SAFETY: s is non-null and points to len readable bytes.
        let bytes = unsafe { std::slice::from_raw_parts(s.cast::<u8>(), len) };
        hash::fnv1a(bytes)
    })
}

/// Copy `len` bytes from `src` to `dest`. Either pointer null is a no-op.
///
/// Overlapping regions are copied as if through an intermediate buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_memory_copy(dest: *mut c_void, src: *const c_void, len: usize) {
    ffi_guard!((), {
        if dest.is_null() || src.is_null() {
            return;
        }
        // SAFETY: both pointers are non-null and valid for len bytes per
        // caller contract; ptr::copy permits overlap.
        unsafe { std::ptr::copy(src.cast::<u8>(), dest.cast::<u8>(), len) };
    })
}

/// Three-way compare of the first `len` bytes of `a` and `b`.
///
/// Returns `-1`, `0` or `1`, or [`COMPARE_ERROR`] if either pointer is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fast_memory_compare(a: *const c_void, b: *const c_void, len: usize) -> c_int {
    ffi_guard!(COMPARE_ERROR, {
        if a.is_null() || b.is_null() {
            return COMPARE_ERROR;
        }
        // SAFETY: both pointers are non-null and valid for len bytes.
        let (lhs, rhs) = unsafe {
            (
                std::slice::from_raw_parts(a.cast::<u8>(), len),
                std::slice::from_raw_parts(b.cast::<u8>(), len),
            )
        };
        match memory::compare(lhs, rhs) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    })
}
