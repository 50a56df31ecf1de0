//! C FFI for the nativeops primitives.
//!
//! Exposes two flat symbol sets with different error conventions:
//!
//! - [`mathlib`]: 32-bit arithmetic, buffer-checked string transforms,
//!   `int32_t` arrays and a byte-buffer allocator. Failures return `0`,
//!   `-1` or `NULL` and overwrite a per-thread diagnostic message read
//!   through [`get_last_error`](mathlib::get_last_error).
//! - [`task_ops`]: 64-bit arithmetic, in-place string transforms, `int64_t`
//!   arrays, hashing and raw memory. Failures return an out-of-domain
//!   sentinel (see [`status`]) and record no message.
//!
//! All computation is delegated to `nativeops-core`; this crate only
//! validates pointers, converts between C spans and Rust slices, and maps
//! [`OpsError`](nativeops_core::OpsError) onto each convention. It is the
//! only crate in the workspace that contains `unsafe` code, opted into per
//! function.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

/// Run an FFI function body, converting a panic into `$on_panic` instead of
/// unwinding into C.
///
/// `return` inside the body returns from the guarded closure, so early
/// exits work as in an ordinary function.
macro_rules! ffi_guard {
    ($on_panic:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => $on_panic,
        }
    };
}

pub mod last_error;
pub mod mathlib;
mod registry;
pub mod status;
pub mod task_ops;

pub use status::{MathStatus, TaskOpsCode, TaskOpsError};
