//! Typed dispatch over the primitives.
//!
//! Callers that pick an operation at runtime (from a task queue, a config
//! file, a REPL) name it with one of the operation enums and pass loosely
//! shaped arguments. Argument count and domain are validated here, so
//! every failure comes back as an [`OpsError`].

use crate::collection::{max, sort, sum};
use crate::error::{OpsError, OpsResult};
use crate::hash::fnv1a;
use crate::numeric::{factorial_signed, fibonacci, gcd, sqrt};
use crate::text::{reverse_in_place, terminated_len};

/// Integer-valued numeric operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathOperation {
    /// `n!` for `0 <= n <= 20`.
    Factorial,
    /// `F(n)` for `0 <= n <= 92`.
    Fibonacci,
    /// Square root, truncated toward zero.
    SquareRoot,
    /// Greatest common divisor of two values.
    GreatestCommonDivisor,
}

impl MathOperation {
    /// Name used in error values.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Factorial => "factorial",
            Self::Fibonacci => "fibonacci",
            Self::SquareRoot => "sqrt",
            Self::GreatestCommonDivisor => "gcd",
        }
    }

    /// Number of arguments the operation takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::GreatestCommonDivisor => 2,
            _ => 1,
        }
    }
}

/// String-to-string operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringOperation {
    /// Byte-order reversal.
    Reverse,
    /// ASCII uppercasing up to the first NUL.
    Uppercase,
    /// FNV-1a 64, rendered in decimal.
    Hash,
}

/// Reductions over an `i64` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayOperation {
    /// Wrapping sum.
    Sum,
    /// Largest element.
    Max,
    /// Smallest element, found by sorting.
    Sort,
}

/// Narrow a dispatched argument to the `i32` domain of factorial and
/// Fibonacci, reporting out-of-range values the way those functions would.
fn narrow(op: MathOperation, n: i64) -> OpsResult<i32> {
    i32::try_from(n).map_err(|_| match op {
        MathOperation::Factorial => OpsError::FactorialOutOfRange {
            n,
            max: crate::numeric::FACTORIAL_MAX,
        },
        _ if n < 0 => OpsError::NegativeInput {
            operation: op.name(),
        },
        _ => OpsError::Overflow {
            operation: op.name(),
        },
    })
}

/// Run `op` over `args`.
///
/// ```
/// use nativeops_core::ops::{execute_math, MathOperation};
/// assert_eq!(execute_math(MathOperation::GreatestCommonDivisor, &[54, 24]), Ok(6));
/// assert!(execute_math(MathOperation::Factorial, &[1, 2]).is_err());
/// ```
pub fn execute_math(op: MathOperation, args: &[i64]) -> OpsResult<i64> {
    if args.len() != op.arity() {
        return Err(OpsError::WrongArity {
            operation: op.name(),
            expected: op.arity(),
            actual: args.len(),
        });
    }

    match op {
        MathOperation::Factorial => factorial_signed(narrow(op, args[0])?),
        MathOperation::Fibonacci => fibonacci(narrow(op, args[0])?),
        // f64 -> i64 `as` saturates; the root of any i64 fits comfortably.
        MathOperation::SquareRoot => sqrt(args[0] as f64).map(|root| root as i64),
        MathOperation::GreatestCommonDivisor => {
            i64::try_from(gcd(args[0], args[1])).map_err(|_| OpsError::Overflow {
                operation: op.name(),
            })
        }
    }
}

/// Run `op` over `input`.
///
/// `Reverse` works on bytes, so reversing multi-byte UTF-8 fails with
/// [`OpsError::InvalidUtf8`]. `Uppercase` and `Hash` stop at the first NUL,
/// like their C counterparts; `Uppercase` keeps the bytes after it.
pub fn execute_string(op: StringOperation, input: &str) -> OpsResult<String> {
    match op {
        StringOperation::Reverse => {
            let mut bytes = input.as_bytes().to_vec();
            reverse_in_place(&mut bytes);
            String::from_utf8(bytes).map_err(|_| OpsError::InvalidUtf8 {
                operation: "reverse",
            })
        }
        StringOperation::Uppercase => {
            // NUL is ASCII, so its position is always a char boundary.
            let (head, tail) = input.split_at(terminated_len(input.as_bytes()));
            Ok(head.to_ascii_uppercase() + tail)
        }
        StringOperation::Hash => Ok(fnv1a(input.as_bytes()).to_string()),
    }
}

/// Run `op` over `values`. Empty input fails with [`OpsError::EmptyInput`]
/// for every operation.
pub fn execute_array(op: ArrayOperation, mut values: Vec<i64>) -> OpsResult<i64> {
    if values.is_empty() {
        return Err(OpsError::EmptyInput {
            operation: "execute_array",
        });
    }

    match op {
        ArrayOperation::Sum => Ok(sum(&values)),
        ArrayOperation::Max => max(&values),
        ArrayOperation::Sort => {
            sort(&mut values);
            Ok(values[0])
        }
    }
}
