// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Numeric Limits
//!
//! A small capability interface that generic numeric code can depend on to
//! discover the finite range of a type and whether it can represent an
//! infinity or a quiet NaN. [`BoundedInt`] implements it alongside the signed
//! primitives and the IEEE-754 floats, so code written against
//! `NumericLimits` works for all of them without special cases.
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::num::bounded::BoundedInt;
//! use tally_core::num::limits::NumericLimits;
//!
//! fn unbounded_or_max<T: NumericLimits>() -> T {
//!     T::infinity().unwrap_or_else(T::max_finite)
//! }
//!
//! assert_eq!(unbounded_or_max::<i32>(), i32::MAX);
//! assert_eq!(unbounded_or_max::<f64>(), f64::INFINITY);
//! assert_eq!(
//!     unbounded_or_max::<BoundedInt<i32>>(),
//!     BoundedInt::positive_infinity()
//! );
//! ```

use crate::num::bounded::BoundedInt;
use crate::num::constants::SentinelRepr;

/// Static capability queries over a numeric type.
pub trait NumericLimits: Sized {
    /// Whether the type only holds integral values.
    const IS_INTEGER: bool;
    /// Whether the type can represent positive infinity.
    const HAS_INFINITY: bool;
    /// Whether the type can represent a quiet NaN.
    const HAS_QUIET_NAN: bool;

    /// The smallest finite value.
    fn min_finite() -> Self;

    /// The largest finite value.
    fn max_finite() -> Self;

    /// The lowest finite value. For every implementation in this crate this
    /// equals [`NumericLimits::min_finite`].
    #[inline]
    fn lowest() -> Self {
        Self::min_finite()
    }

    /// Positive infinity, if the type has one.
    fn infinity() -> Option<Self>;

    /// A quiet NaN, if the type has one.
    fn quiet_nan() -> Option<Self>;
}

impl<T> NumericLimits for BoundedInt<T>
where
    T: SentinelRepr,
{
    const IS_INTEGER: bool = true;
    const HAS_INFINITY: bool = true;
    const HAS_QUIET_NAN: bool = true;

    #[inline]
    fn min_finite() -> Self {
        <Self as num_traits::Bounded>::min_value()
    }

    #[inline]
    fn max_finite() -> Self {
        <Self as num_traits::Bounded>::max_value()
    }

    #[inline]
    fn infinity() -> Option<Self> {
        Some(Self::positive_infinity())
    }

    #[inline]
    fn quiet_nan() -> Option<Self> {
        Some(Self::invalid())
    }
}

macro_rules! impl_numeric_limits_for_int {
    ($t:ty) => {
        impl NumericLimits for $t {
            const IS_INTEGER: bool = true;
            const HAS_INFINITY: bool = false;
            const HAS_QUIET_NAN: bool = false;

            #[inline(always)]
            fn min_finite() -> Self {
                <$t>::MIN
            }

            #[inline(always)]
            fn max_finite() -> Self {
                <$t>::MAX
            }

            #[inline(always)]
            fn infinity() -> Option<Self> {
                None
            }

            #[inline(always)]
            fn quiet_nan() -> Option<Self> {
                None
            }
        }
    };
}

impl_numeric_limits_for_int!(i8);
impl_numeric_limits_for_int!(i16);
impl_numeric_limits_for_int!(i32);
impl_numeric_limits_for_int!(i64);
impl_numeric_limits_for_int!(i128);
impl_numeric_limits_for_int!(isize);

macro_rules! impl_numeric_limits_for_float {
    ($t:ty) => {
        impl NumericLimits for $t {
            const IS_INTEGER: bool = false;
            const HAS_INFINITY: bool = true;
            const HAS_QUIET_NAN: bool = true;

            #[inline(always)]
            fn min_finite() -> Self {
                <$t>::MIN
            }

            #[inline(always)]
            fn max_finite() -> Self {
                <$t>::MAX
            }

            #[inline(always)]
            fn infinity() -> Option<Self> {
                Some(<$t>::INFINITY)
            }

            #[inline(always)]
            fn quiet_nan() -> Option<Self> {
                Some(<$t>::NAN)
            }
        }
    };
}

impl_numeric_limits_for_float!(f32);
impl_numeric_limits_for_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn describe<T: NumericLimits>() -> (bool, bool, bool) {
        (T::IS_INTEGER, T::HAS_INFINITY, T::HAS_QUIET_NAN)
    }

    #[test]
    fn test_bounded_int_limits() {
        type B = BoundedInt<i16>;
        assert_eq!(describe::<B>(), (true, true, true));
        assert_eq!(B::min_finite(), B::new(-i16::MAX + 1));
        assert_eq!(B::max_finite(), B::new(i16::MAX - 1));
        assert_eq!(B::lowest(), B::min_finite());
        assert_eq!(B::infinity(), Some(B::positive_infinity()));
        assert!(B::quiet_nan().is_some_and(|n| n.is_invalid()));
    }

    #[test]
    fn test_finite_limits_are_finite_and_one_step_from_infinity() {
        type B = BoundedInt<i32>;
        let mut max = B::max_finite();
        let mut min = B::min_finite();
        assert!(max.is_finite() && min.is_finite());
        max.increment();
        min.decrement();
        assert_eq!(max, B::positive_infinity());
        assert_eq!(min, B::negative_infinity());
    }

    #[test]
    fn test_primitive_limits() {
        assert_eq!(describe::<i64>(), (true, false, false));
        assert_eq!(i64::min_finite(), i64::MIN);
        assert_eq!(i64::lowest(), i64::MIN);
        assert_eq!(i64::max_finite(), i64::MAX);
        assert_eq!(i64::infinity(), None);
        assert_eq!(i64::quiet_nan(), None);
    }

    #[test]
    fn test_float_limits() {
        assert_eq!(describe::<f32>(), (false, true, true));
        assert_eq!(f32::lowest(), f32::MIN);
        assert_eq!(f64::infinity(), Some(f64::INFINITY));
        assert!(f64::quiet_nan().is_some_and(f64::is_nan));
    }
}
