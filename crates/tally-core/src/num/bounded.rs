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

//! # Bounded Integers
//!
//! `BoundedInt<T>` wraps a signed integer and behaves like it wherever it can,
//! while also representing positive infinity, negative infinity and an
//! invalid (NaN-like) result. It is meant for sizes, distances and offsets of
//! sequences whose length may be unknown or unbounded.
//!
//! ## Semantics
//!
//! - Construction saturates: raw values below `-MAX` become negative infinity.
//! - Arithmetic never panics and never wraps. Finite overflow saturates to the
//!   matching infinity, indeterminate forms (`inf + -inf`, `0 / 0`) produce
//!   the invalid value, and an invalid operand poisons every result.
//! - Comparisons follow IEEE-754 "unordered" rules: an invalid value is not
//!   equal to anything (itself included) and is neither less nor greater
//!   than anything.
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::num::bounded::BoundedInt;
//!
//! let unbounded = BoundedInt::<i64>::positive_infinity();
//! let known = BoundedInt::new(10i64);
//!
//! assert_eq!(known + BoundedInt::new(5), BoundedInt::new(15));
//! assert_eq!(known + unbounded, unbounded);
//! assert!((unbounded - unbounded).is_invalid());
//! assert_eq!(format!("{}", -unbounded), "-inf");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::ToPrimitive;

use crate::num::constants::SentinelRepr;

/// The class a [`BoundedInt`] value falls into.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::bounded::{BoundedInt, Category};
///
/// assert_eq!(BoundedInt::new(3i32).classify(), Category::Finite);
/// assert_eq!(BoundedInt::<i32>::invalid().classify(), Category::Invalid);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Strictly between negative and positive infinity.
    Finite,
    /// The positive infinity sentinel.
    PositiveInfinity,
    /// The negative infinity sentinel.
    NegativeInfinity,
    /// The invalid (NaN-like) sentinel.
    Invalid,
}

/// A signed integer extended with infinities and an invalid value.
///
/// The sentinels live in the extreme values of `T`, see
/// [`SentinelRepr`]. The finite range is therefore
/// `-MAX + 1 ..= MAX - 1`.
///
/// `BoundedInt` implements `PartialEq` and `PartialOrd` but neither `Eq` nor
/// `Ord`, because the invalid value is not equal to itself.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::bounded::BoundedInt;
///
/// let a = BoundedInt::new(i8::MAX - 1);
/// let b = BoundedInt::new(2i8);
/// assert_eq!(a + b, BoundedInt::positive_infinity()); // saturates
///
/// let nan = BoundedInt::<i8>::invalid();
/// assert!(nan != nan);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct BoundedInt<T> {
    value: T,
}

impl<T> BoundedInt<T>
where
    T: SentinelRepr,
{
    /// Creates a `BoundedInt` from a raw value.
    ///
    /// Raw values below `-MAX` (that is, `MIN`) saturate to negative infinity.
    /// `MAX` itself is positive infinity and `-MAX` is negative infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::num::bounded::BoundedInt;
    ///
    /// assert_eq!(BoundedInt::new(42i32).get(), 42);
    /// assert_eq!(BoundedInt::new(i32::MIN), BoundedInt::negative_infinity());
    /// assert!(!BoundedInt::new(i32::MIN).is_invalid());
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        if value < T::NEG_INF {
            Self { value: T::NEG_INF }
        } else {
            Self { value }
        }
    }

    /// Returns positive infinity.
    #[inline]
    pub fn positive_infinity() -> Self {
        Self { value: T::POS_INF }
    }

    /// Returns negative infinity.
    #[inline]
    pub fn negative_infinity() -> Self {
        Self { value: T::NEG_INF }
    }

    /// Returns the invalid value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::num::bounded::BoundedInt;
    ///
    /// let nan = BoundedInt::<i16>::invalid();
    /// assert!(nan.is_invalid());
    /// assert!(!nan.is_finite());
    /// ```
    #[inline]
    pub fn invalid() -> Self {
        Self { value: T::INVALID }
    }

    /// Returns the stored raw value, sentinels included.
    #[inline]
    pub fn get(self) -> T {
        self.value
    }

    /// Returns `true` if the value is neither infinite nor invalid.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value > T::NEG_INF && self.value < T::POS_INF
    }

    /// Returns `true` if the value is positive or negative infinity.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.value == T::POS_INF || self.value == T::NEG_INF
    }

    /// Returns `true` if the value is the invalid sentinel.
    #[inline]
    pub fn is_invalid(self) -> bool {
        self.value == T::INVALID
    }

    /// Returns the category of the value.
    #[inline]
    pub fn classify(self) -> Category {
        if self.value == T::POS_INF {
            Category::PositiveInfinity
        } else if self.value == T::NEG_INF {
            Category::NegativeInfinity
        } else if self.value == T::INVALID {
            Category::Invalid
        } else {
            Category::Finite
        }
    }

    /// Increments the value in place and returns it.
    ///
    /// Infinities and the invalid value are left unchanged. Incrementing the
    /// largest finite value yields positive infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::num::bounded::BoundedInt;
    ///
    /// let mut n = BoundedInt::new(1i32);
    /// assert_eq!(*n.increment(), BoundedInt::new(2));
    ///
    /// let mut inf = BoundedInt::<i32>::positive_infinity();
    /// inf.increment();
    /// assert_eq!(inf, BoundedInt::positive_infinity());
    /// ```
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        if self.is_finite() {
            self.value = self.value + T::one();
        }
        self
    }

    /// Decrements the value in place and returns it.
    ///
    /// Infinities and the invalid value are left unchanged. Decrementing the
    /// smallest finite value yields negative infinity.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        if self.is_finite() {
            self.value = self.value - T::one();
        }
        self
    }

    /// Increments the value in place and returns the value it held before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::num::bounded::BoundedInt;
    ///
    /// let mut n = BoundedInt::new(7i64);
    /// assert_eq!(n.post_increment(), BoundedInt::new(7));
    /// assert_eq!(n, BoundedInt::new(8));
    /// ```
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Decrements the value in place and returns the value it held before.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }

    /// Returns the raw value if it is finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::num::bounded::{BoundedInt, TryFromBoundedIntError};
    ///
    /// assert_eq!(BoundedInt::new(-4i32).to_finite(), Ok(-4));
    /// assert_eq!(
    ///     BoundedInt::<i32>::positive_infinity().to_finite(),
    ///     Err(TryFromBoundedIntError::PositiveInfinity)
    /// );
    /// ```
    #[inline]
    pub fn to_finite(self) -> Result<T, TryFromBoundedIntError> {
        match self.classify() {
            Category::Finite => Ok(self.value),
            Category::PositiveInfinity => Err(TryFromBoundedIntError::PositiveInfinity),
            Category::NegativeInfinity => Err(TryFromBoundedIntError::NegativeInfinity),
            Category::Invalid => Err(TryFromBoundedIntError::Invalid),
        }
    }

    /// Converts a finite, non-negative value into an element count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::num::bounded::{BoundedInt, TryFromBoundedIntError};
    ///
    /// assert_eq!(BoundedInt::new(12isize).try_into_count(), Ok(12usize));
    /// assert_eq!(
    ///     BoundedInt::new(-1isize).try_into_count(),
    ///     Err(TryFromBoundedIntError::OutOfRange)
    /// );
    /// ```
    #[inline]
    pub fn try_into_count(self) -> Result<usize, TryFromBoundedIntError> {
        self.to_finite()?
            .to_usize()
            .ok_or(TryFromBoundedIntError::OutOfRange)
    }

    #[inline]
    fn add_finite(left: T, right: T) -> Self {
        // Bounds are checked before adding so the raw sum cannot overflow.
        if right >= T::zero() && left > T::POS_INF - right {
            Self::positive_infinity()
        } else if right < T::zero() && left < T::NEG_INF - right {
            Self::negative_infinity()
        } else {
            Self {
                value: left + right,
            }
        }
    }
}

impl<T> Default for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn default() -> Self {
        Self { value: T::zero() }
    }
}

impl<T> From<T> for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> PartialEq for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        !self.is_invalid() && !other.is_invalid() && self.value == other.value
    }
}

impl<T> PartialOrd for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_invalid() || other.is_invalid() {
            None
        } else {
            Some(self.value.cmp(&other.value))
        }
    }
}

impl<T> Neg for BoundedInt<T>
where
    T: SentinelRepr,
{
    type Output = Self;

    /// Negates the value. `-inf` and `inf` map onto each other and the
    /// invalid value stays invalid.
    #[inline]
    fn neg(self) -> Self::Output {
        if self.is_invalid() {
            self
        } else {
            // value >= -MAX, so the negation is always representable.
            Self { value: -self.value }
        }
    }
}

impl<T> Add for BoundedInt<T>
where
    T: SentinelRepr,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        match (self.classify(), rhs.classify()) {
            (Category::Invalid, _) | (_, Category::Invalid) => Self::invalid(),
            (Category::Finite, Category::Finite) => Self::add_finite(self.value, rhs.value),
            (Category::Finite, _) => rhs,
            (_, Category::Finite) => self,
            (left, right) if left == right => self,
            _ => Self::invalid(),
        }
    }
}

impl<T> Sub for BoundedInt<T>
where
    T: SentinelRepr,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl<T> Div for BoundedInt<T>
where
    T: SentinelRepr,
{
    type Output = Self;

    /// Divides two values.
    ///
    /// | left     | right      | result                               |
    /// |----------|------------|--------------------------------------|
    /// | invalid  | any        | invalid                              |
    /// | any      | invalid    | invalid                              |
    /// | `0`      | `0`        | invalid                              |
    /// | finite   | `0`        | infinity with the sign of `left`     |
    /// | finite   | `±inf`     | `right`, negated if `left < 0`       |
    /// | `±inf`   | `0`        | `left`                               |
    /// | `±inf`   | finite     | `left`, negated if `right < 0`       |
    /// | `±inf`   | `±inf`     | `1` or `-1` by the product of signs  |
    /// | finite   | finite     | truncating integer division          |
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        let zero = T::zero();
        match (self.classify(), rhs.classify()) {
            (Category::Invalid, _) | (_, Category::Invalid) => Self::invalid(),
            (Category::Finite, Category::Finite) if rhs.value == zero => {
                if self.value == zero {
                    Self::invalid()
                } else if self.value < zero {
                    Self::negative_infinity()
                } else {
                    Self::positive_infinity()
                }
            }
            (Category::Finite, Category::Finite) => Self {
                value: self.value / rhs.value,
            },
            (Category::Finite, _) => {
                if self.value < zero {
                    -rhs
                } else {
                    rhs
                }
            }
            (_, Category::Finite) if rhs.value == zero => self,
            (_, Category::Finite) => {
                if rhs.value < zero {
                    -self
                } else {
                    self
                }
            }
            _ => Self {
                value: self.value / rhs.value,
            },
        }
    }
}

impl<T> AddAssign for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T> DivAssign for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T> Sum for BoundedInt<T>
where
    T: SentinelRepr,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, x| acc + x)
    }
}

impl<'a, T> Sum<&'a BoundedInt<T>> for BoundedInt<T>
where
    T: SentinelRepr,
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, x| acc + *x)
    }
}

impl<T> num_traits::Bounded for BoundedInt<T>
where
    T: SentinelRepr,
{
    /// The smallest finite value, `-MAX + 1`.
    #[inline]
    fn min_value() -> Self {
        Self {
            value: T::NEG_INF + T::one(),
        }
    }

    /// The largest finite value, `MAX - 1`.
    #[inline]
    fn max_value() -> Self {
        Self {
            value: T::POS_INF - T::one(),
        }
    }
}

impl<T> num_traits::Zero for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

impl<T> ToPrimitive for BoundedInt<T>
where
    T: SentinelRepr,
{
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_finite().ok()?.to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_finite().ok()?.to_u64()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.to_finite().ok()?.to_i128()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.to_finite().ok()?.to_u128()
    }
}

impl<T> fmt::Display for BoundedInt<T>
where
    T: SentinelRepr,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classify() {
            Category::Finite => fmt::Display::fmt(&self.value, f),
            Category::PositiveInfinity => f.pad("inf"),
            Category::NegativeInfinity => f.pad("-inf"),
            Category::Invalid => f.pad("NaN"),
        }
    }
}

impl<T> fmt::Debug for BoundedInt<T>
where
    T: SentinelRepr,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedInt({})", self)
    }
}

/// Parses an integer literal of `T`, or one of `inf`, `+inf`, `-inf` and
/// `nan` (case-insensitive). Integer literals are saturated like [`BoundedInt::new`].
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::bounded::BoundedInt;
///
/// let n: BoundedInt<i32> = "17".parse().unwrap();
/// assert_eq!(n, BoundedInt::new(17));
///
/// let inf: BoundedInt<i32> = "-inf".parse().unwrap();
/// assert_eq!(inf, BoundedInt::negative_infinity());
///
/// assert!("seven".parse::<BoundedInt<i32>>().is_err());
/// ```
impl<T> FromStr for BoundedInt<T>
where
    T: SentinelRepr + FromStr,
{
    type Err = ParseBoundedIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("+inf") {
            return Ok(Self::positive_infinity());
        }
        if s.eq_ignore_ascii_case("-inf") {
            return Ok(Self::negative_infinity());
        }
        if s.eq_ignore_ascii_case("nan") {
            return Ok(Self::invalid());
        }
        s.parse::<T>()
            .map(Self::new)
            .map_err(|_| ParseBoundedIntError {
                input: s.to_string(),
            })
    }
}

/// The error returned when a [`BoundedInt`] cannot be converted into a raw
/// integer or element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TryFromBoundedIntError {
    /// The value is positive infinity.
    PositiveInfinity,
    /// The value is negative infinity.
    NegativeInfinity,
    /// The value is invalid.
    Invalid,
    /// The value is finite but does not fit the target type.
    OutOfRange,
}

impl fmt::Display for TryFromBoundedIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositiveInfinity => write!(f, "cannot convert positive infinity to an integer"),
            Self::NegativeInfinity => write!(f, "cannot convert negative infinity to an integer"),
            Self::Invalid => write!(f, "cannot convert an invalid value to an integer"),
            Self::OutOfRange => write!(f, "finite value is out of range for the target type"),
        }
    }
}

impl std::error::Error for TryFromBoundedIntError {}

/// The error returned when parsing a [`BoundedInt`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoundedIntError {
    input: String,
}

impl ParseBoundedIntError {
    /// Returns the input that failed to parse.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseBoundedIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bounded integer literal `{}`", self.input)
    }
}

impl std::error::Error for ParseBoundedIntError {}

macro_rules! impl_try_from_bounded_for {
    ($t:ty) => {
        impl TryFrom<BoundedInt<$t>> for $t {
            type Error = TryFromBoundedIntError;

            #[inline]
            fn try_from(value: BoundedInt<$t>) -> Result<Self, Self::Error> {
                value.to_finite()
            }
        }
    };
}

impl_try_from_bounded_for!(i8);
impl_try_from_bounded_for!(i16);
impl_try_from_bounded_for!(i32);
impl_try_from_bounded_for!(i64);
impl_try_from_bounded_for!(i128);
impl_try_from_bounded_for!(isize);
