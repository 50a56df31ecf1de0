//! nativeops: arithmetic, string, array and memory primitives.
//!
//! This is the facade crate. It re-exports the safe Rust API from
//! `nativeops-core` and the C ABI from `nativeops-ffi`; most users only need
//! this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use nativeops::prelude::*;
//!
//! assert_eq!(numeric::factorial(5), Ok(120));
//! assert_eq!(numeric::gcd(54, 24), 6);
//!
//! let mut out = [0u8; 6];
//! text::reverse_into(b"hello", &mut out).unwrap();
//! assert_eq!(&out, b"olleh\0");
//!
//! let mut values = vec![5i64, -2, 9, 0];
//! collection::sort(&mut values);
//! assert_eq!(values, [-2, 0, 5, 9]);
//!
//! // Failures are values, never sentinels.
//! assert!(matches!(
//!     collection::max::<i64>(&[]),
//!     Err(OpsError::EmptyInput { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Source | Contents |
//! |--------|--------|----------|
//! | [`numeric`] | `nativeops-core` | Factorial, Fibonacci, gcd, Newton square root |
//! | [`text`] | `nativeops-core` | Buffer-checked and in-place string transforms |
//! | [`hash`] | `nativeops-core` | FNV-1a 64 |
//! | [`collection`] | `nativeops-core` | Sum, max, quicksort |
//! | [`memory`] | `nativeops-core` | Byte copy and compare, [`ByteBuffer`](memory::ByteBuffer) |
//! | [`analysis`] | `nativeops-core` | Composite summaries built from the primitives |
//! | [`ops`] | `nativeops-core` | Operation enums with checked dispatch |
//! | [`ffi`] | `nativeops-ffi` | The `mathlib` and `task_ops` C symbols |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use nativeops_core::{analysis, collection, hash, memory, numeric, ops, text};

/// Error type shared by every fallible operation (`nativeops-core`).
pub use nativeops_core::error;

/// The C ABI (`nativeops-ffi`).
///
/// [`ffi::mathlib`] reports failures through status codes and a per-thread
/// message; [`ffi::task_ops`] returns sentinels listed in [`ffi::status`].
pub use nativeops_ffi as ffi;

/// Common imports for typical nativeops usage.
///
/// ```rust
/// use nativeops::prelude::*;
/// ```
pub mod prelude {
    // Modules
    pub use nativeops_core::{analysis, collection, hash, memory, numeric, ops, text};

    // Types
    pub use nativeops_core::{
        ArrayOperation, ArraySummary, ByteBuffer, Integer, MathOperation, NumberSummary,
        OpsError, OpsResult, StringOperation, TextSummary,
    };
}
