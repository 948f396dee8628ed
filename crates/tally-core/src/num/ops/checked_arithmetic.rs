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

//! Checked arithmetic by value.
//!
//! For the signed primitives the traits forward to the inherent `checked_*`
//! methods. For [`BoundedInt`] the operations are total and only report
//! `None` when the result is the invalid value, so infinities are considered
//! successful results.

use core::ops::{Add, Div, Neg, Sub};

use crate::num::bounded::BoundedInt;
use crate::num::constants::SentinelRepr;

/// Checked addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::bounded::BoundedInt;
/// # use tally_core::num::ops::checked_arithmetic::CheckedAddVal;
///
/// assert_eq!(i8::MAX.checked_add_val(1), None);
///
/// let inf = BoundedInt::<i8>::positive_infinity();
/// assert_eq!(BoundedInt::new(1i8).checked_add_val(inf), Some(inf));
/// assert_eq!(inf.checked_add_val(-inf), None);
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition, returning `None` on overflow or an invalid result.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value (no references).
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction, returning `None` on overflow or an invalid result.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked negation by value (no references).
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::bounded::BoundedInt;
/// # use tally_core::num::ops::checked_arithmetic::CheckedNegVal;
///
/// assert_eq!(i8::MIN.checked_neg_val(), None);
/// assert_eq!(
///     BoundedInt::<i8>::negative_infinity().checked_neg_val(),
///     Some(BoundedInt::positive_infinity())
/// );
/// ```
pub trait CheckedNegVal: Sized + Neg<Output = Self> {
    /// Performs checked negation, returning `None` on overflow or an invalid result.
    fn checked_neg_val(self) -> Option<Self>;
}

/// Checked division by value (no references).
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::bounded::BoundedInt;
/// # use tally_core::num::ops::checked_arithmetic::CheckedDivVal;
///
/// assert_eq!(5i32.checked_div_val(0), None);
/// assert_eq!(
///     BoundedInt::new(5i32).checked_div_val(BoundedInt::new(0)),
///     Some(BoundedInt::positive_infinity())
/// );
/// assert_eq!(BoundedInt::new(0i32).checked_div_val(BoundedInt::new(0)), None);
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division, returning `None` on overflow, division by
    /// zero, or an invalid result.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($($t:ty),*) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: Self) -> Option<Self> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: Self) -> Option<Self> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedNegVal for $t {
                #[inline(always)]
                fn checked_neg_val(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }
            }

            impl CheckedDivVal for $t {
                #[inline(always)]
                fn checked_div_val(self, v: Self) -> Option<Self> {
                    <$t>::checked_div(self, v)
                }
            }
        )*
    };
}

checked_impl_val!(i8, i16, i32, i64, i128, isize);

#[inline(always)]
fn valid<T: SentinelRepr>(value: BoundedInt<T>) -> Option<BoundedInt<T>> {
    if value.is_invalid() { None } else { Some(value) }
}

impl<T: SentinelRepr> CheckedAddVal for BoundedInt<T> {
    #[inline(always)]
    fn checked_add_val(self, v: Self) -> Option<Self> {
        valid(self + v)
    }
}

impl<T: SentinelRepr> CheckedSubVal for BoundedInt<T> {
    #[inline(always)]
    fn checked_sub_val(self, v: Self) -> Option<Self> {
        valid(self - v)
    }
}

impl<T: SentinelRepr> CheckedNegVal for BoundedInt<T> {
    #[inline(always)]
    fn checked_neg_val(self) -> Option<Self> {
        valid(-self)
    }
}

impl<T: SentinelRepr> CheckedDivVal for BoundedInt<T> {
    #[inline(always)]
    fn checked_div_val(self, v: Self) -> Option<Self> {
        valid(self / v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_add_val<T: CheckedAddVal>(a: T, b: T) -> Option<T> {
        a.checked_add_val(b)
    }
    fn checked_sub_val<T: CheckedSubVal>(a: T, b: T) -> Option<T> {
        a.checked_sub_val(b)
    }
    fn checked_neg_val<T: CheckedNegVal>(a: T) -> Option<T> {
        a.checked_neg_val()
    }
    fn checked_div_val<T: CheckedDivVal>(a: T, b: T) -> Option<T> {
        a.checked_div_val(b)
    }

    type B = BoundedInt<i8>;

    #[test]
    fn test_checked_primitives() {
        assert_eq!(checked_add_val(127i8, 1), None);
        assert_eq!(checked_add_val(100i8, 1), Some(101));
        assert_eq!(checked_sub_val(-128i8, 1), None);
        assert_eq!(checked_neg_val(-128i8), None);
        assert_eq!(checked_div_val(-128i8, -1), None);
        assert_eq!(checked_div_val(9i8, 0), None);
        assert_eq!(checked_div_val(9i8, 3), Some(3));
    }

    #[test]
    fn test_checked_bounded_int_overflow_saturates() {
        assert_eq!(
            checked_add_val(B::new(126), B::new(1)),
            Some(B::positive_infinity())
        );
        assert_eq!(
            checked_sub_val(B::new(-126), B::new(1)),
            Some(B::negative_infinity())
        );
        assert_eq!(checked_add_val(B::new(3), B::new(4)), Some(B::new(7)));
    }

    #[test]
    fn test_checked_bounded_int_reports_invalid() {
        let inf = B::positive_infinity();
        assert_eq!(checked_add_val(inf, -inf), None);
        assert_eq!(checked_sub_val(inf, inf), None);
        assert_eq!(checked_neg_val(B::invalid()), None);
        assert_eq!(checked_div_val(B::new(0), B::new(0)), None);
        assert_eq!(checked_div_val(B::new(-2), B::new(0)), Some(-inf));
        assert_eq!(checked_add_val(B::invalid(), B::new(1)), None);
    }
}
