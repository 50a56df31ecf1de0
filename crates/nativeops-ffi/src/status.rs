//! C-compatible status codes and sentinel values.
//!
//! [`MathStatus`] is returned by the status-reporting `mathlib` symbols.
//! [`TaskOpsCode`] lists the sentinels the `task_ops` symbols return in
//! place of a value. Both are `repr(i32)` and ABI-stable.

use std::error::Error;
use std::fmt;

use nativeops_core::OpsError;

/// Status returned by `reverse_string`, `uppercase_string` and `find_max`.
///
/// The diagnostic for `Error` is available from `get_last_error`.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathStatus {
    /// Success.
    Ok = 0,
    /// Failure; a diagnostic message was recorded.
    Error = -1,
}

/// Sentinels returned by the `task_ops` symbols.
///
/// Integer-valued operations return one of the negative codes in place of
/// their result. Where the valid range of an operation includes negative
/// numbers (`fast_array_sum`, `fast_array_max`) a legitimate result can
/// collide with a sentinel; callers that care must validate inputs first.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskOpsCode {
    /// Success.
    Success = 0,
    /// Null pointer, or input outside the operation's domain.
    InvalidInput = -1,
    /// Empty span where at least one element is required.
    InvalidSize = -2,
    /// The exact result does not fit the return type.
    Overflow = -3,
}

impl TaskOpsCode {
    /// The code widened to the `int64_t` return type of the value-returning
    /// operations.
    pub const fn as_i64(self) -> i64 {
        self as i32 as i64
    }
}

impl From<&OpsError> for TaskOpsCode {
    fn from(e: &OpsError) -> Self {
        match e {
            OpsError::FactorialOutOfRange { .. }
            | OpsError::NegativeInput { .. }
            | OpsError::NotANumber { .. }
            | OpsError::WrongArity { .. }
            | OpsError::InvalidUtf8 { .. } => TaskOpsCode::InvalidInput,
            OpsError::EmptyInput { .. }
            | OpsError::BufferTooSmall { .. }
            | OpsError::AllocationFailed { .. } => TaskOpsCode::InvalidSize,
            OpsError::Overflow { .. } => TaskOpsCode::Overflow,
        }
    }
}

impl TryFrom<i32> for TaskOpsCode {
    type Error = i32;

    /// Decode a raw code; unknown values are handed back unchanged.
    fn try_from(code: i32) -> Result<Self, i32> {
        match code {
            0 => Ok(TaskOpsCode::Success),
            -1 => Ok(TaskOpsCode::InvalidInput),
            -2 => Ok(TaskOpsCode::InvalidSize),
            -3 => Ok(TaskOpsCode::Overflow),
            other => Err(other),
        }
    }
}

/// A non-success code returned by a `task_ops` symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskOpsError {
    /// Symbol or operation that produced the code.
    pub operation: &'static str,
    /// Raw code as returned across the ABI.
    pub code: i32,
}

impl TaskOpsError {
    /// The decoded code, or `None` if it is not one of [`TaskOpsCode`].
    pub fn kind(&self) -> Option<TaskOpsCode> {
        TaskOpsCode::try_from(self.code).ok()
    }
}

impl fmt::Display for TaskOpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(TaskOpsCode::InvalidInput) => {
                write!(f, "{}: null pointer or invalid input", self.operation)
            }
            Some(TaskOpsCode::InvalidSize) => write!(f, "{}: invalid size", self.operation),
            Some(TaskOpsCode::Overflow) => write!(f, "{}: overflow", self.operation),
            Some(TaskOpsCode::Success) | None => {
                write!(f, "{}: unknown error code {}", self.operation, self.code)
            }
        }
    }
}

impl Error for TaskOpsError {}

/// Turn a `task_ops` return code into a `Result`.
///
/// Only [`TaskOpsCode::Success`] is `Ok`; every other value, known or not,
/// is an error carrying the raw code.
///
/// ```
/// use nativeops_ffi::status::{check, TaskOpsCode};
/// assert!(check(0, "fast_factorial").is_ok());
/// let err = check(-3, "fast_factorial").unwrap_err();
/// assert_eq!(err.kind(), Some(TaskOpsCode::Overflow));
/// ```
pub fn check(code: i32, operation: &'static str) -> Result<(), TaskOpsError> {
    match TaskOpsCode::try_from(code) {
        Ok(TaskOpsCode::Success) => Ok(()),
        _ => Err(TaskOpsError { operation, code }),
    }
}

/// Returned by `fast_sqrt` for negative or NaN input.
pub const SQRT_ERROR: f64 = -1.0;

/// Returned by `fast_memory_compare` when either span is null.
///
/// Distinct from the normalised ordering results `-1`, `0` and `1`.
pub const COMPARE_ERROR: i32 = i32::MIN;

/// Returned by `fast_string_hash` for a null input. FNV-1a of the empty
/// string is the offset basis, not zero.
pub const HASH_NO_INPUT: u64 = 0;
