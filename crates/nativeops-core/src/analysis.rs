//! Composite summaries built from the primitive operations.
//!
//! Each summary runs several primitives over one input and collects the
//! results, skipping the parts whose domain the input falls outside of
//! (e.g. no factorial for a first value above 20).

use crate::collection::{max, sort, sum};
use crate::error::{OpsError, OpsResult};
use crate::hash::fnv1a;
use crate::numeric::{factorial_signed, fibonacci, gcd_unsigned, sqrt};
use crate::text::{reverse_in_place, terminated, uppercase_in_place};

/// Numeric summary of an `i64` sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberSummary {
    /// Wrapping sum of all values.
    pub sum: i64,
    /// Largest value.
    pub max: i64,
    /// Greatest common divisor folded over all values.
    pub gcd: u64,
    /// Factorial of the first value, when it lies in `0..=20`.
    pub factorial_first: Option<i64>,
    /// Fibonacci number of the last value, when it lies in `0..=92`.
    pub fibonacci_last: Option<i64>,
    /// Square root of the sum, when the sum is non-negative.
    pub sqrt_sum: Option<f64>,
}

/// Summarize a non-empty sequence of integers.
pub fn summarize_numbers(values: &[i64]) -> OpsResult<NumberSummary> {
    let (&first, &last) = match (values.first(), values.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(OpsError::EmptyInput {
                operation: "summarize_numbers",
            })
        }
    };

    let total = sum(values);
    let divisor = values
        .iter()
        .fold(0u64, |acc, &v| gcd_unsigned(acc, v.unsigned_abs()));

    Ok(NumberSummary {
        sum: total,
        max: max(values)?,
        gcd: divisor,
        factorial_first: i32::try_from(first)
            .ok()
            .and_then(|n| factorial_signed(n).ok()),
        fibonacci_last: i32::try_from(last).ok().and_then(|n| fibonacci(n).ok()),
        sqrt_sum: sqrt(total as f64).ok(),
    })
}

/// Transforms and fingerprints of a byte string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSummary {
    /// FNV-1a hash of the input.
    pub original_hash: u64,
    /// Input with its bytes in reverse order.
    pub reversed: Vec<u8>,
    /// FNV-1a hash of `reversed`.
    pub reversed_hash: u64,
    /// ASCII-uppercased input.
    pub uppercase: Vec<u8>,
    /// FNV-1a hash of `uppercase`.
    pub uppercase_hash: u64,
    /// Whether the input reads the same reversed, ignoring ASCII case.
    pub is_palindrome: bool,
}

/// Summarize the terminated prefix of `input`.
pub fn analyze_text(input: &[u8]) -> OpsResult<TextSummary> {
    let input = terminated(input);
    if input.is_empty() {
        return Err(OpsError::EmptyInput {
            operation: "analyze_text",
        });
    }

    let mut reversed = input.to_vec();
    reverse_in_place(&mut reversed);
    let mut uppercase = input.to_vec();
    uppercase_in_place(&mut uppercase);

    Ok(TextSummary {
        original_hash: fnv1a(input),
        reversed_hash: fnv1a(&reversed),
        uppercase_hash: fnv1a(&uppercase),
        is_palindrome: input.eq_ignore_ascii_case(&reversed),
        reversed,
        uppercase,
    })
}

/// Order statistics of one array in a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArraySummary {
    /// Position of the array in the batch.
    pub index: usize,
    /// Number of elements.
    pub len: usize,
    /// Wrapping sum.
    pub sum: i64,
    /// Largest element.
    pub max: i64,
    /// Middle element, or the mean of the two middle elements (truncated
    /// toward zero) for even lengths.
    pub median: i64,
    /// Largest minus smallest element, wrapping.
    pub range: i64,
    /// The elements in ascending order.
    pub sorted: Vec<i64>,
}

/// Summarize every array of a batch. Fails if the batch or any array in it
/// is empty.
pub fn summarize_arrays(arrays: Vec<Vec<i64>>) -> OpsResult<Vec<ArraySummary>> {
    if arrays.is_empty() {
        return Err(OpsError::EmptyInput {
            operation: "summarize_arrays",
        });
    }

    arrays
        .into_iter()
        .enumerate()
        .map(|(index, mut values)| {
            let largest = max(&values)?;
            let total = sum(&values);
            sort(&mut values);

            let mid = values.len() / 2;
            let median = if values.len() % 2 == 0 {
                ((i128::from(values[mid - 1]) + i128::from(values[mid])) / 2) as i64
            } else {
                values[mid]
            };

            Ok(ArraySummary {
                index,
                len: values.len(),
                sum: total,
                max: largest,
                median,
                range: largest.wrapping_sub(values[0]),
                sorted: values,
            })
        })
        .collect()
}
