//! Integer and floating-point arithmetic.
//!
//! `add` and `multiply` wrap on overflow like native fixed-width
//! arithmetic. Everything else validates its domain and reports
//! out-of-range input as an [`OpsError`].

use crate::error::{OpsError, OpsResult};

/// Largest `n` accepted by [`factorial`]; `20!` is the last factorial
/// that fits in 64 bits.
pub const FACTORIAL_MAX: u32 = 20;

/// Largest `n` accepted by [`fibonacci`]; `F(93)` overflows `i64`.
pub const FIBONACCI_MAX: i32 = 92;

/// Upper bound on Newton iterations in [`sqrt`].
///
/// Starting from `x / 2`, extreme magnitudes need a few hundred halving
/// steps before quadratic convergence takes over.
const SQRT_MAX_ITERATIONS: u32 = 4096;

/// Wrapping 32-bit addition.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Wrapping 32-bit multiplication.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// `n!` for `0 <= n <= FACTORIAL_MAX`.
///
/// ```
/// use nativeops_core::numeric::factorial;
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: u32) -> OpsResult<u64> {
    if n > FACTORIAL_MAX {
        return Err(OpsError::FactorialOutOfRange {
            n: i64::from(n),
            max: FACTORIAL_MAX,
        });
    }
    Ok((2..=u64::from(n)).product())
}

/// Signed-domain factorial: rejects negative `n` as well as `n > 20`.
pub fn factorial_signed(n: i32) -> OpsResult<i64> {
    let unsigned = u32::try_from(n).map_err(|_| OpsError::FactorialOutOfRange {
        n: i64::from(n),
        max: FACTORIAL_MAX,
    })?;
    let value = factorial(unsigned)?;
    i64::try_from(value).map_err(|_| OpsError::Overflow {
        operation: "factorial",
    })
}

/// The `n`-th Fibonacci number, `F(0) = 0`, `F(1) = 1`.
pub fn fibonacci(n: i32) -> OpsResult<i64> {
    if n < 0 {
        return Err(OpsError::NegativeInput {
            operation: "fibonacci",
        });
    }
    if n > FIBONACCI_MAX {
        return Err(OpsError::Overflow {
            operation: "fibonacci",
        });
    }
    if n <= 1 {
        return Ok(i64::from(n));
    }

    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        let next = a + b;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`.
///
/// Unsigned so that `gcd(i64::MIN, 0) == 2^63` stays representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_unsigned(a.unsigned_abs(), b.unsigned_abs())
}

/// Euclid's algorithm over unsigned magnitudes.
pub fn gcd_unsigned(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Square root by Newton-Raphson iteration starting from `x / 2`.
///
/// Iterates until two successive estimates are bit-identical. Some inputs
/// settle into a two-cycle between adjacent floats instead; the smaller of
/// the pair is returned. Zero and `+inf` are returned unchanged.
pub fn sqrt(x: f64) -> OpsResult<f64> {
    if x.is_nan() {
        return Err(OpsError::NotANumber { operation: "sqrt" });
    }
    if x < 0.0 {
        return Err(OpsError::NegativeInput { operation: "sqrt" });
    }
    if x == 0.0 || x.is_infinite() {
        return Ok(x);
    }

    // The smallest subnormal halves to zero.
    let start = if x / 2.0 > 0.0 { x / 2.0 } else { x };
    Ok(settle(start, SQRT_MAX_ITERATIONS, |guess| (guess + x / guess) / 2.0))
}

/// Apply `step` from `start` until an iterate repeats or `max_iterations`
/// steps have run.
///
/// A fixed point is returned as is. A two-cycle returns the smaller of the
/// pair. Hitting the cap returns the last iterate.
fn settle(start: f64, max_iterations: u32, step: impl Fn(f64) -> f64) -> f64 {
    let mut guess = start;
    let mut previous = guess;
    for _ in 0..max_iterations {
        let next = step(guess);
        if next.to_bits() == guess.to_bits() {
            return next;
        }
        if next.to_bits() == previous.to_bits() {
            return next.min(guess);
        }
        previous = guess;
        guess = next;
    }
    guess
}
