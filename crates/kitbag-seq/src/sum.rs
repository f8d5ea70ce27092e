//! Type-preserving numeric summation.

use kitbag_core::error::UsageError;
use num_traits::{CheckedAdd, WrappingAdd, Zero};

/// Numeric element types that [`sum`] and [`checked_sum`] accept.
///
/// Implemented for every primitive integer and float. Anything else is
/// rejected at compile time:
///
/// ```compile_fail
/// kitbag_seq::sum(&["a", "b"]);
/// ```
pub trait Summable: Copy + Zero {
    /// Adds `rhs`, wrapping integers at the type's width.
    #[must_use]
    fn accumulate(self, rhs: Self) -> Self;

    /// Adds `rhs`, returning `None` if an integer result does not fit.
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_summable_int {
    ($($t:ty),* $(,)?) => {$(
        impl Summable for $t {
            fn accumulate(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }
        }
    )*};
}

macro_rules! impl_summable_float {
    ($($t:ty),* $(,)?) => {$(
        impl Summable for $t {
            fn accumulate(self, rhs: Self) -> Self {
                self + rhs
            }

            fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
        }
    )*};
}

impl_summable_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_summable_float!(f32, f64);

/// Returns the sum of `values` in their own type, or zero for an empty slice.
///
/// Integer sums wrap on overflow; use [`checked_sum`] to detect it.
#[must_use]
pub fn sum<T: Summable>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc.accumulate(v))
}

/// Returns the sum of `values`, failing if an integer sum overflows.
///
/// # Errors
///
/// Returns `UsageError::Overflow` naming the element type if any partial sum
/// does not fit in `T`.
pub fn checked_sum<T: Summable>(values: &[T]) -> Result<T, UsageError> {
    values.iter().try_fold(T::zero(), |acc, &v| {
        acc.checked_accumulate(v).ok_or(UsageError::Overflow {
            type_name: std::any::type_name::<T>(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sum_of_ints() {
        assert_eq!(sum(&[1, 2, 3]), 6);
    }

    #[test]
    fn test_sum_of_empty_floats_is_zero() {
        let empty: [f64; 0] = [];
        assert!(sum(&empty).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sum_of_empty_unsigned_is_zero() {
        assert_eq!(sum::<u16>(&[]), 0);
    }

    #[test]
    fn test_sum_preserves_narrow_width() {
        let total: i8 = sum(&[-100_i8, 20, 30]);
        assert_eq!(total, -50);
    }

    #[test]
    fn test_sum_of_floats() {
        let total = sum(&[0.5_f32, 0.25, 0.25]);
        assert!((total - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sum_wraps_on_overflow() {
        assert_eq!(sum(&[250_u8, 10]), 4);
    }

    #[test]
    fn test_checked_sum_reports_overflow() {
        assert_eq!(
            checked_sum(&[i32::MAX, 1]),
            Err(UsageError::Overflow { type_name: "i32" })
        );
    }

    #[test]
    fn test_checked_sum_accepts_fitting_values() {
        assert_eq!(checked_sum(&[u64::MAX - 1, 1]), Ok(u64::MAX));
    }

    proptest! {
        #[test]
        fn prop_checked_sum_fails_only_when_a_partial_sum_overflows(
            values in proptest::collection::vec(any::<i32>(), 0..64),
        ) {
            let partials_fit = values
                .iter()
                .scan(0_i64, |acc, &v| {
                    *acc += i64::from(v);
                    Some(*acc)
                })
                .all(|partial| i32::try_from(partial).is_ok());
            let wide: i64 = values.iter().map(|&v| i64::from(v)).sum();

            match checked_sum(&values) {
                Ok(total) => {
                    prop_assert!(partials_fit);
                    prop_assert_eq!(i64::from(total), wide);
                }
                Err(_) => prop_assert!(!partials_fit),
            }
        }
    }
}
