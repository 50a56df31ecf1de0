//! `mathlib` symbols: status codes plus a per-thread diagnostic message.
//!
//! Failures return `0`, [`MathStatus::Error`] or `NULL` depending on the
//! symbol, and overwrite the message read through [`get_last_error`].
//! Success never clears the message.

use std::ffi::{c_char, c_int, CStr};

use nativeops_core::{collection, numeric, text, ByteBuffer};

use crate::last_error;
use crate::registry;
use crate::status::MathStatus;

const NULL_POINTER: &str = "null pointer";

/// `a + b`, wrapping on overflow.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn add_numbers(a: i32, b: i32) -> i32 {
    numeric::add(a, b)
}

/// `a * b`, wrapping on overflow.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn multiply_numbers(a: i32, b: i32) -> i32 {
    numeric::multiply(a, b)
}

/// `n!` for `n <= 20`. Returns 0 and records a message otherwise.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn factorial(n: u32) -> u64 {
    ffi_guard!(0, {
        numeric::factorial(n).unwrap_or_else(|e| {
            last_error::record("factorial", &e);
            0
        })
    })
}

/// Signature shared by the two buffer-checked string transforms.
type Transform = fn(&[u8], &mut [u8]) -> nativeops_core::OpsResult<usize>;

#[allow(unsafe_code)]
fn transform_into(
    operation: &'static str,
    transform: Transform,
    input: *const c_char,
    output: *mut c_char,
    output_capacity: usize,
) -> c_int {
    if input.is_null() || output.is_null() {
        last_error::record(operation, &NULL_POINTER);
        return MathStatus::Error as c_int;
    }

    // SAFETY: input is non-null and NUL-terminated per caller contract. The
    // bytes are copied out before the output slice is formed, so an output
    // buffer that aliases the input is still sound.
    let source = unsafe { CStr::from_ptr(input) }.to_bytes().to_vec();
    // SAFETY: output is non-null and points to output_capacity writable bytes.
    let dest = unsafe { std::slice::from_raw_parts_mut(output.cast::<u8>(), output_capacity) };

    match transform(&source, dest) {
        Ok(_) => MathStatus::Ok as c_int,
        Err(e) => {
            last_error::record(operation, &e);
            MathStatus::Error as c_int
        }
    }
}

/// Write `input` reversed into `output`, NUL-terminated.
///
/// Returns `-1` and records a message if either pointer is null or
/// `output_capacity < strlen(input) + 1`; `output` is untouched then.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn reverse_string(
    input: *const c_char,
    output: *mut c_char,
    output_capacity: usize,
) -> c_int {
    ffi_guard!(MathStatus::Error as c_int, {
        transform_into(
            "reverse_string",
            text::reverse_into,
            input,
            output,
            output_capacity,
        )
    })
}

/// Write `input` ASCII-uppercased into `output`, NUL-terminated.
///
/// Same failure rules as [`reverse_string`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn uppercase_string(
    input: *const c_char,
    output: *mut c_char,
    output_capacity: usize,
) -> c_int {
    ffi_guard!(MathStatus::Error as c_int, {
        transform_into(
            "uppercase_string",
            text::uppercase_into,
            input,
            output,
            output_capacity,
        )
    })
}

/// `strlen(s)`. A null `s` returns 0 and records a message, which is
/// indistinguishable from the empty string by return value alone.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn string_length(s: *const c_char) -> usize {
    ffi_guard!(0, {
        if s.is_null() {
            last_error::record("string_length", &NULL_POINTER);
            return 0;
        }
        // SAFETY: s is non-null and NUL-terminated per caller contract.
        unsafe { CStr::from_ptr(s) }.to_bytes().len()
    })
}

/// Wrapping sum of `array[0..length]`. A null `array` returns 0 and records
/// a message; an empty span sums to 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sum_array(array: *const i32, length: usize) -> i32 {
    ffi_guard!(0, {
        if array.is_null() {
            last_error::record("sum_array", &NULL_POINTER);
            return 0;
        }
        // SAFETY: array is non-null and points to length readable i32 values.
        let values = unsafe { std::slice::from_raw_parts(array, length) };
        collection::sum(values)
    })
}

/// Write the maximum of `array[0..length]` to `*max_value`.
///
/// Returns `-1` and records a message for a null pointer or an empty span;
/// `*max_value` is untouched then.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn find_max(array: *const i32, length: usize, max_value: *mut i32) -> c_int {
    ffi_guard!(MathStatus::Error as c_int, {
        if array.is_null() || max_value.is_null() {
            last_error::record("find_max", &NULL_POINTER);
            return MathStatus::Error as c_int;
        }
        // SAFETY: array is non-null and points to length readable i32 values.
        let values = unsafe { std::slice::from_raw_parts(array, length) };
        match collection::max(values) {
            Ok(max) => {
                // SAFETY: max_value is non-null and writable per caller contract.
                unsafe { *max_value = max };
                MathStatus::Ok as c_int
            }
            Err(e) => {
                last_error::record("find_max", &e);
                MathStatus::Error as c_int
            }
        }
    })
}

/// Allocate `size` zeroed bytes, to be released with [`free_string`].
///
/// A zero `size` still returns a unique one-byte buffer. Returns `NULL` and
/// records a message if the allocation fails.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn allocate_string(size: usize) -> *mut c_char {
    ffi_guard!(std::ptr::null_mut(), {
        match ByteBuffer::allocate(size.max(1)) {
            Ok(buffer) => registry::insert(buffer).cast::<c_char>(),
            Err(e) => {
                last_error::record("allocate_string", &e);
                std::ptr::null_mut()
            }
        }
    })
}

/// Release a buffer returned by [`allocate_string`].
///
/// `NULL` is a no-op. A pointer that was never handed out, or has already
/// been released, is left alone and recorded as an error.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn free_string(s: *mut c_char) {
    ffi_guard!((), {
        if s.is_null() {
            return;
        }
        if !registry::release(s.cast::<u8>()) {
            #[cfg(debug_assertions)]
            eprintln!("nativeops: free_string called with unknown pointer {s:p}");
            last_error::record("free_string", &"pointer was not returned by allocate_string");
        }
    })
}

/// This thread's last diagnostic message, NUL-terminated.
///
/// The pointer stays valid for the life of the calling thread; its contents
/// change on the next failing call made on that thread.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn get_last_error() -> *const c_char {
    last_error::as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    use nativeops_test_utils::c_str;

    fn last_message() -> String {
        last_error::message()
    }

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(add_numbers(2, 3), 5);
        assert_eq!(add_numbers(i32::MAX, 1), i32::MIN);
        assert_eq!(multiply_numbers(6, 7), 42);
        assert_eq!(multiply_numbers(i32::MAX, 2), -2);
    }

    #[test]
    fn factorial_in_range() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn factorial_out_of_range_records_message() {
        assert_eq!(factorial(21), 0);
        assert_eq!(
            last_message(),
            "factorial: factorial input 21 out of range (max 20)"
        );
    }

    #[test]
    fn reverse_and_uppercase_write_terminated_output() {
        let input = CString::new("hello").unwrap();
        let mut out = [0x7fu8; 8];

        let status = reverse_string(input.as_ptr(), out.as_mut_ptr().cast(), out.len());
        assert_eq!(status, MathStatus::Ok as c_int);
        assert_eq!(c_str(&out), "olleh");

        let status = uppercase_string(input.as_ptr(), out.as_mut_ptr().cast(), out.len());
        assert_eq!(status, MathStatus::Ok as c_int);
        assert_eq!(c_str(&out), "HELLO");
    }

    #[test]
    fn reverse_into_small_buffer_fails() {
        let input = CString::new("hello").unwrap();
        let mut out = [0u8; 3];
        let status = reverse_string(input.as_ptr(), out.as_mut_ptr().cast(), out.len());
        assert_eq!(status, MathStatus::Error as c_int);
        assert_eq!(out, [0, 0, 0]);
        assert_eq!(
            last_message(),
            "reverse_string: output buffer too small: need 6 bytes, have 3"
        );
    }

    #[test]
    fn exact_capacity_is_enough() {
        let input = CString::new("abc").unwrap();
        let mut out = [0u8; 4];
        let status = uppercase_string(input.as_ptr(), out.as_mut_ptr().cast(), out.len());
        assert_eq!(status, MathStatus::Ok as c_int);
        assert_eq!(&out, b"ABC\0");
    }

    #[test]
    fn transforms_reject_null() {
        let input = CString::new("x").unwrap();
        let mut out = [0u8; 4];
        assert_eq!(
            reverse_string(std::ptr::null(), out.as_mut_ptr().cast(), 4),
            MathStatus::Error as c_int
        );
        assert_eq!(last_message(), "reverse_string: null pointer");
        assert_eq!(
            uppercase_string(input.as_ptr(), std::ptr::null_mut(), 4),
            MathStatus::Error as c_int
        );
        assert_eq!(last_message(), "uppercase_string: null pointer");
    }

    #[test]
    fn reverse_in_aliased_buffer() {
        let mut buf = *b"abcd\0";
        let ptr = buf.as_mut_ptr().cast::<c_char>();
        assert_eq!(reverse_string(ptr, ptr, buf.len()), MathStatus::Ok as c_int);
        assert_eq!(&buf, b"dcba\0");
    }

    #[test]
    fn string_length_counts_to_terminator() {
        let s = CString::new("hello").unwrap();
        assert_eq!(string_length(s.as_ptr()), 5);
        let empty = CString::new("").unwrap();
        assert_eq!(string_length(empty.as_ptr()), 0);
    }

    #[test]
    fn string_length_null_is_zero_with_message() {
        assert_eq!(string_length(std::ptr::null()), 0);
        assert_eq!(last_message(), "string_length: null pointer");
    }

    #[test]
    fn sum_array_conventions() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(sum_array(values.as_ptr(), values.len()), 15);
        assert_eq!(sum_array(values.as_ptr(), 0), 0);
        assert_eq!(sum_array(std::ptr::null(), 3), 0);
        assert_eq!(last_message(), "sum_array: null pointer");
    }

    #[test]
    fn find_max_writes_out_param() {
        let values = [1, 2, 3, 4, 5];
        let mut out = 0;
        assert_eq!(
            find_max(values.as_ptr(), values.len(), &mut out),
            MathStatus::Ok as c_int
        );
        assert_eq!(out, 5);

        let negative = [-7, -3, -9];
        assert_eq!(
            find_max(negative.as_ptr(), negative.len(), &mut out),
            MathStatus::Ok as c_int
        );
        assert_eq!(out, -3);
    }

    #[test]
    fn find_max_failures_leave_out_param() {
        let values = [4, 2];
        let mut out = 99;
        assert_eq!(
            find_max(values.as_ptr(), 0, &mut out),
            MathStatus::Error as c_int
        );
        assert_eq!(out, 99);
        assert_eq!(last_message(), "find_max: max requires a non-empty input");

        assert_eq!(
            find_max(values.as_ptr(), values.len(), std::ptr::null_mut()),
            MathStatus::Error as c_int
        );
        assert_eq!(last_message(), "find_max: null pointer");
    }

    #[test]
    fn allocate_write_free() {
        let ptr = allocate_string(16);
        assert!(!ptr.is_null());
        assert!(registry::contains(ptr.cast()));

        let input = CString::new("ffi").unwrap();
        assert_eq!(uppercase_string(input.as_ptr(), ptr, 16), MathStatus::Ok as c_int);
        assert_eq!(string_length(ptr), 3);

        free_string(ptr);
        assert!(!registry::contains(ptr.cast()));
    }

    #[test]
    fn allocate_zero_returns_unique_buffer() {
        let a = allocate_string(0);
        let b = allocate_string(0);
        assert!(!a.is_null());
        assert_ne!(a, b);
        free_string(a);
        free_string(b);
    }

    #[test]
    fn allocate_impossible_size_returns_null() {
        assert!(allocate_string(usize::MAX).is_null());
        assert!(last_message().starts_with("allocate_string: failed to allocate"));
    }

    #[test]
    fn free_null_is_noop() {
        last_error::record("marker", &"unchanged");
        free_string(std::ptr::null_mut());
        assert_eq!(last_message(), "marker: unchanged");
    }

    #[test]
    fn double_free_is_detected() {
        let ptr = allocate_string(8);
        free_string(ptr);
        free_string(ptr);
        assert_eq!(
            last_message(),
            "free_string: pointer was not returned by allocate_string"
        );
    }

    #[test]
    fn success_does_not_clear_message() {
        assert_eq!(factorial(30), 0);
        let before = last_message();
        assert_eq!(factorial(3), 6);
        assert_eq!(last_message(), before);
    }

    #[test]
    fn get_last_error_reads_slot() {
        string_length(std::ptr::null());
        // SAFETY: the slot is always NUL-terminated.
        #[allow(unsafe_code)]
        let text = unsafe { CStr::from_ptr(get_last_error()) };
        assert_eq!(text.to_str().unwrap(), "string_length: null pointer");
    }
}
