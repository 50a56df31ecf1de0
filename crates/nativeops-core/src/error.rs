//! Error type shared by every nativeops operation.
//!
//! The safe API reports each failure as an [`OpsError`] value. The C ABI
//! maps these onto its two legacy conventions: a status code plus a
//! diagnostic message (the `mathlib` symbols) or an out-of-domain sentinel
//! (the `task_ops` symbols).

use std::error::Error;
use std::fmt;

/// Result alias used throughout the crate.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors from numeric, text, collection and memory operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpsError {
    /// Factorial input outside `0..=max`.
    FactorialOutOfRange {
        /// The rejected input.
        n: i64,
        /// Largest accepted input.
        max: u32,
    },
    /// A negative input was given to an operation defined only for
    /// non-negative values.
    NegativeInput {
        /// Name of the rejecting operation.
        operation: &'static str,
    },
    /// A NaN was given to a floating-point operation.
    NotANumber {
        /// Name of the rejecting operation.
        operation: &'static str,
    },
    /// The exact result does not fit the output type.
    Overflow {
        /// Name of the overflowing operation.
        operation: &'static str,
    },
    /// An output buffer cannot hold the result plus its terminator.
    BufferTooSmall {
        /// Bytes required, terminator included.
        needed: usize,
        /// Bytes available.
        capacity: usize,
    },
    /// The operation needs at least one element.
    EmptyInput {
        /// Name of the rejecting operation.
        operation: &'static str,
    },
    /// The allocator could not provide a buffer of the requested size.
    AllocationFailed {
        /// Requested size in bytes.
        size: usize,
    },
    /// An operation was dispatched with the wrong number of arguments.
    WrongArity {
        /// Name of the dispatched operation.
        operation: &'static str,
        /// Arguments the operation takes.
        expected: usize,
        /// Arguments supplied.
        actual: usize,
    },
    /// A byte-level transform produced bytes that are not valid UTF-8.
    InvalidUtf8 {
        /// Name of the transform.
        operation: &'static str,
    },
}

impl fmt::Display for OpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactorialOutOfRange { n, max } => {
                write!(f, "factorial input {n} out of range (max {max})")
            }
            Self::NegativeInput { operation } => {
                write!(f, "{operation} is undefined for negative input")
            }
            Self::NotANumber { operation } => write!(f, "{operation} received NaN"),
            Self::Overflow { operation } => write!(f, "{operation} result overflows"),
            Self::BufferTooSmall { needed, capacity } => {
                write!(
                    f,
                    "output buffer too small: need {needed} bytes, have {capacity}"
                )
            }
            Self::EmptyInput { operation } => write!(f, "{operation} requires a non-empty input"),
            Self::AllocationFailed { size } => write!(f, "failed to allocate {size} bytes"),
            Self::WrongArity {
                operation,
                expected,
                actual,
            } => write!(
                f,
                "{operation} takes {expected} argument(s), got {actual}"
            ),
            Self::InvalidUtf8 { operation } => {
                write!(f, "{operation} produced invalid UTF-8")
            }
        }
    }
}

impl Error for OpsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_limit() {
        let e = OpsError::FactorialOutOfRange { n: 21, max: 20 };
        assert_eq!(e.to_string(), "factorial input 21 out of range (max 20)");
    }

    #[test]
    fn display_buffer_sizes() {
        let e = OpsError::BufferTooSmall {
            needed: 6,
            capacity: 3,
        };
        assert_eq!(
            e.to_string(),
            "output buffer too small: need 6 bytes, have 3"
        );
    }

    #[test]
    fn display_arity() {
        let e = OpsError::WrongArity {
            operation: "gcd",
            expected: 2,
            actual: 3,
        };
        assert_eq!(e.to_string(), "gcd takes 2 argument(s), got 3");
    }

    #[test]
    fn every_variant_has_nonempty_message() {
        let all = [
            OpsError::FactorialOutOfRange { n: -1, max: 20 },
            OpsError::NegativeInput { operation: "sqrt" },
            OpsError::NotANumber { operation: "sqrt" },
            OpsError::Overflow {
                operation: "fibonacci",
            },
            OpsError::BufferTooSmall {
                needed: 1,
                capacity: 0,
            },
            OpsError::EmptyInput { operation: "max" },
            OpsError::AllocationFailed { size: usize::MAX },
            OpsError::WrongArity {
                operation: "gcd",
                expected: 2,
                actual: 1,
            },
            OpsError::InvalidUtf8 {
                operation: "reverse",
            },
        ];
        for e in &all {
            assert!(!e.to_string().is_empty(), "{e:?}");
        }
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn Error> = Box::new(OpsError::EmptyInput { operation: "max" });
        assert!(e.source().is_none());
    }
}
