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

//! # Sentinel Representations
//!
//! Raw signed integer types that can back a
//! [`BoundedInt`](crate::num::bounded::BoundedInt). Three values of every
//! representation are reserved:
//!
//! - `POS_INF = MAX` marks positive infinity.
//! - `NEG_INF = -MAX` marks negative infinity. This is deliberately not `MIN`,
//!   because on two's complement hardware `-MIN` is not representable.
//! - `INVALID = MIN` is the NaN analog, one below `NEG_INF`.
//!
//! Every implementation asserts at compile time that `MIN < -MAX`, so
//! `INVALID` and `NEG_INF` can never collide.

use num_traits::{PrimInt, Signed};

/// A signed, fixed-width integer that reserves its extreme values as sentinels.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::constants::SentinelRepr;
///
/// assert_eq!(<i8 as SentinelRepr>::POS_INF, 127);
/// assert_eq!(<i8 as SentinelRepr>::NEG_INF, -127);
/// assert_eq!(<i8 as SentinelRepr>::INVALID, -128);
/// ```
pub trait SentinelRepr: PrimInt + Signed + std::fmt::Debug + std::fmt::Display {
    /// The raw value representing positive infinity (`MAX`).
    const POS_INF: Self;
    /// The raw value representing negative infinity (`-MAX`).
    const NEG_INF: Self;
    /// The raw value representing an invalid result (`MIN`).
    const INVALID: Self;
}

macro_rules! impl_sentinel_repr_for {
    ($t:ty) => {
        const _: () = assert!(
            <$t>::MIN < -<$t>::MAX,
            "representation must be two's complement so that MIN and -MAX differ"
        );

        impl SentinelRepr for $t {
            const POS_INF: Self = <$t>::MAX;
            const NEG_INF: Self = -<$t>::MAX;
            const INVALID: Self = <$t>::MIN;
        }
    };
}

impl_sentinel_repr_for!(i8);
impl_sentinel_repr_for!(i16);
impl_sentinel_repr_for!(i32);
impl_sentinel_repr_for!(i64);
impl_sentinel_repr_for!(i128);
impl_sentinel_repr_for!(isize);

#[cfg(test)]
mod tests {
    use super::SentinelRepr;

    fn sentinels<T: SentinelRepr>() -> (T, T, T) {
        (T::POS_INF, T::NEG_INF, T::INVALID)
    }

    #[test]
    fn test_sentinels_i8() {
        assert_eq!(sentinels::<i8>(), (127, -127, -128));
    }

    #[test]
    fn test_sentinels_i64() {
        assert_eq!(sentinels::<i64>(), (i64::MAX, -i64::MAX, i64::MIN));
    }

    #[test]
    fn test_invalid_sits_one_below_negative_infinity() {
        fn check<T: SentinelRepr>() {
            assert!(T::INVALID < T::NEG_INF);
            assert_eq!(T::INVALID + T::one(), T::NEG_INF);
            assert_eq!(-T::NEG_INF, T::POS_INF);
        }
        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<i128>();
        check::<isize>();
    }
}
