//! Sum, maximum and in-place sort over integer slices.

use crate::error::{OpsError, OpsResult};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width signed integers accepted by [`sum`].
///
/// Sealed: implemented for `i32` and `i64` only.
pub trait Integer: Copy + Ord + sealed::Sealed {
    /// The additive identity.
    const ZERO: Self;

    /// Addition that wraps on overflow.
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                const ZERO: Self = 0;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

impl_integer!(i32, i64);

/// Wrapping sum of `values`; the empty slice sums to zero.
///
/// ```
/// use nativeops_core::collection::sum;
/// assert_eq!(sum(&[1i32, 2, 3, 4, 5]), 15);
/// assert_eq!(sum::<i64>(&[]), 0);
/// ```
pub fn sum<T: Integer>(values: &[T]) -> T {
    values
        .iter()
        .fold(T::ZERO, |acc, &v| Integer::wrapping_add(acc, v))
}

/// Largest element of `values`.
///
/// A negative maximum is an ordinary result, not an error.
pub fn max<T: Ord + Copy>(values: &[T]) -> OpsResult<T> {
    values
        .iter()
        .copied()
        .max()
        .ok_or(OpsError::EmptyInput { operation: "max" })
}

/// Sort `values` ascending with a partition-exchange (quicksort).
///
/// Each partition step uses the last element as pivot (Lomuto scheme), so
/// the sort is not stable and already-sorted or reverse-sorted input costs
/// O(n²) comparisons. Only the smaller side of each partition is sorted
/// recursively; the larger side is handled by the loop, which keeps the
/// recursion depth logarithmic on every input.
pub fn sort<T: Ord>(values: &mut [T]) {
    let mut rest = values;
    while rest.len() > 1 {
        let slice = std::mem::take(&mut rest);
        let pivot = partition(slice);
        let (left, right) = slice.split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort(left);
            rest = right;
        } else {
            sort(right);
            rest = left;
        }
    }
}

/// Partition around the last element and return its final index.
fn partition<T: Ord>(values: &mut [T]) -> usize {
    let high = values.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if values[j] <= values[high] {
            values.swap(store, j);
            store += 1;
        }
    }
    values.swap(store, high);
    store
}
