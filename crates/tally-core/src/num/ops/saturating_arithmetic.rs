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

//! Saturating arithmetic by value.
//!
//! The primitives clamp to `MIN`/`MAX`. [`BoundedInt`] clamps to its
//! infinities instead, and its operators already saturate, so its
//! implementations simply forward to them.

use core::ops::{Add, Neg, Sub};

use crate::num::bounded::BoundedInt;
use crate::num::constants::SentinelRepr;

/// Saturating addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::bounded::BoundedInt;
/// # use tally_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// assert_eq!(120i8.saturating_add_val(10), 127); // Clamps at i8::MAX
///
/// let near_max = BoundedInt::new(120i8);
/// assert_eq!(
///     near_max.saturating_add_val(BoundedInt::new(10)),
///     BoundedInt::positive_infinity()
/// );
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value (no references).
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

/// Saturating negation by value (no references).
///
/// For primitives, negating `MIN` clamps to `MAX`. For [`BoundedInt`] every
/// negation is exact, since `-MIN` is never stored as a number.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::saturating_arithmetic::SaturatingNegVal;
///
/// assert_eq!((-128i8).saturating_neg_val(), 127);
/// ```
pub trait SaturatingNegVal: Sized + Neg<Output = Self> {
    /// Performs saturating negation by value.
    fn saturating_neg_val(self) -> Self;
}

macro_rules! saturating_impl_val {
    ($($t:ty),*) => {
        $(
            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: Self) -> Self {
                    <$t>::saturating_add(self, v)
                }
            }

            impl SaturatingSubVal for $t {
                #[inline(always)]
                fn saturating_sub_val(self, v: Self) -> Self {
                    <$t>::saturating_sub(self, v)
                }
            }

            impl SaturatingNegVal for $t {
                #[inline(always)]
                fn saturating_neg_val(self) -> Self {
                    <$t>::saturating_neg(self)
                }
            }
        )*
    };
}

saturating_impl_val!(i8, i16, i32, i64, i128, isize);

impl<T: SentinelRepr> SaturatingAddVal for BoundedInt<T> {
    #[inline(always)]
    fn saturating_add_val(self, v: Self) -> Self {
        self + v
    }
}

impl<T: SentinelRepr> SaturatingSubVal for BoundedInt<T> {
    #[inline(always)]
    fn saturating_sub_val(self, v: Self) -> Self {
        self - v
    }
}

impl<T: SentinelRepr> SaturatingNegVal for BoundedInt<T> {
    #[inline(always)]
    fn saturating_neg_val(self) -> Self {
        -self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saturating_add_val<T: SaturatingAddVal>(a: T, b: T) -> T {
        a.saturating_add_val(b)
    }
    fn saturating_sub_val<T: SaturatingSubVal>(a: T, b: T) -> T {
        a.saturating_sub_val(b)
    }
    fn saturating_neg_val<T: SaturatingNegVal>(a: T) -> T {
        a.saturating_neg_val()
    }

    type B = BoundedInt<i8>;

    #[test]
    fn test_saturating_primitives() {
        assert_eq!(saturating_add_val(127i8, 1), 127);
        assert_eq!(saturating_sub_val(-128i8, 1), -128);
        assert_eq!(saturating_neg_val(-128i8), 127);
    }

    #[test]
    fn test_saturating_bounded_int_clamps_to_infinity() {
        assert_eq!(saturating_add_val(B::new(126), B::new(5)), B::positive_infinity());
        assert_eq!(saturating_sub_val(B::new(-126), B::new(5)), B::negative_infinity());
        assert_eq!(saturating_neg_val(B::negative_infinity()), B::positive_infinity());
        assert_eq!(saturating_add_val(B::new(-3), B::new(5)), B::new(2));
    }

    #[test]
    fn test_saturating_bounded_int_stays_at_infinity() {
        // Unlike primitives, a saturated BoundedInt does not come back down.
        assert_eq!(saturating_add_val(127i8, 1) - 1, 126);
        let inf = saturating_add_val(B::new(126), B::new(1));
        assert_eq!(saturating_sub_val(inf, B::new(1)), B::positive_infinity());
    }
}
