//! Safe arithmetic, text, collection and memory primitives.
//!
//! This is the leaf crate with zero internal dependencies. Every operation
//! exported through the `nativeops-ffi` C ABI is implemented here first,
//! over borrowed slices and owned buffers, reporting failures as
//! [`OpsError`] values rather than sentinels or a shared message slot.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`numeric`] | add, multiply, factorial, Fibonacci, gcd, Newton square root |
//! | [`text`] | reverse and uppercase, buffer-checked and in place |
//! | [`hash`] | FNV-1a 64-bit over terminated byte spans |
//! | [`collection`] | sum, max, quicksort |
//! | [`memory`] | span copy/compare and the scope-bound [`ByteBuffer`] |
//! | [`analysis`] | composite summaries built from the primitives above |
//! | [`ops`] | operation enums and checked dispatch over the primitives |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod collection;
pub mod error;
pub mod hash;
pub mod memory;
pub mod numeric;
pub mod ops;
pub mod text;

pub use analysis::{ArraySummary, NumberSummary, TextSummary};
pub use collection::Integer;
pub use error::{OpsError, OpsResult};
pub use memory::ByteBuffer;
pub use ops::{ArrayOperation, MathOperation, StringOperation};
