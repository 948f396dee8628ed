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

//! # Bounded Size Queries
//!
//! Bridges the standard iterator size hints to [`BoundedInt`]. An iterator
//! whose upper bound is unknown, such as an endless `repeat`, reports an
//! upper size of positive infinity instead of `None`, so sizes of composed
//! sequences can be combined with ordinary arithmetic.
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::num::bounded::BoundedInt;
//! use tally_core::utils::iter::BoundedSizeHint;
//!
//! let odds = (1..=10).filter(|i| i % 2 == 1);
//! assert_eq!(odds.bounded_lower(), BoundedInt::new(0));
//! assert_eq!(odds.bounded_upper(), BoundedInt::new(10));
//!
//! let endless = std::iter::repeat(0u8);
//! assert_eq!(
//!     odds.bounded_upper() + endless.bounded_upper(),
//!     BoundedInt::positive_infinity()
//! );
//! ```

use crate::num::bounded::BoundedInt;

/// The size type reported by [`BoundedSizeHint`].
pub type BoundedSize = BoundedInt<isize>;

/// Converts a count into a [`BoundedSize`]. Counts that do not fit into the
/// finite range of `isize` become positive infinity.
#[inline]
pub fn bounded_size(count: usize) -> BoundedSize {
    match isize::try_from(count) {
        Ok(n) => BoundedInt::new(n),
        Err(_) => BoundedInt::positive_infinity(),
    }
}

/// Size hints of an iterator expressed as [`BoundedSize`] values.
///
/// Implemented for every `Iterator`.
pub trait BoundedSizeHint: Iterator {
    /// The lower bound of the remaining length.
    #[inline]
    fn bounded_lower(&self) -> BoundedSize {
        bounded_size(self.size_hint().0)
    }

    /// The upper bound of the remaining length. An unknown upper bound is
    /// reported as positive infinity.
    #[inline]
    fn bounded_upper(&self) -> BoundedSize {
        self.size_hint()
            .1
            .map_or_else(BoundedInt::positive_infinity, bounded_size)
    }

    /// Consumes the iterator and counts its elements, saturating at positive
    /// infinity.
    ///
    /// Like [`Iterator::count`], this does not return for endless iterators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::num::bounded::BoundedInt;
    /// # use tally_core::utils::iter::BoundedSizeHint;
    ///
    /// let evens = (1..=10).filter(|i| i % 2 == 0);
    /// assert_eq!(evens.bounded_count(), BoundedInt::new(5));
    /// ```
    #[inline]
    fn bounded_count(self) -> BoundedSize
    where
        Self: Sized,
    {
        self.fold(BoundedSize::default(), |mut acc, _| {
            acc.increment();
            acc
        })
    }
}

impl<I> BoundedSizeHint for I where I: Iterator + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_size_saturates_large_counts() {
        assert_eq!(bounded_size(0), BoundedInt::new(0));
        assert_eq!(bounded_size(7), BoundedInt::new(7));
        assert_eq!(
            bounded_size((isize::MAX - 1) as usize),
            BoundedInt::new(isize::MAX - 1)
        );
        assert_eq!(bounded_size(isize::MAX as usize), BoundedInt::positive_infinity());
        assert_eq!(bounded_size(usize::MAX), BoundedInt::positive_infinity());
    }

    #[test]
    fn test_exact_iterator_hints() {
        let v = vec![1, 2, 3, 4];
        let it = v.iter();
        assert_eq!(it.bounded_lower(), BoundedInt::new(4));
        assert_eq!(it.bounded_upper(), BoundedInt::new(4));
        assert!(it.bounded_upper().is_finite());
    }

    #[test]
    fn test_filtered_iterator_has_unknown_lower_bound() {
        let rgi = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let odds = rgi.iter().filter(|&&i| i % 2 == 1);
        assert_eq!(odds.bounded_lower(), BoundedInt::new(0));
        assert_eq!(odds.bounded_upper(), BoundedInt::new(10));
        assert_eq!(odds.clone().bounded_count(), BoundedInt::new(5));
        assert_eq!(odds.rev().copied().collect::<Vec<_>>(), vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_endless_iterator_is_unbounded() {
        let endless = std::iter::repeat(1);
        assert_eq!(endless.bounded_upper(), BoundedInt::positive_infinity());
        assert_eq!(endless.bounded_lower(), BoundedInt::positive_infinity());

        let cycled = [1, 2].iter().cycle();
        assert_eq!(cycled.bounded_upper(), BoundedInt::positive_infinity());
        assert_eq!(cycled.bounded_lower(), BoundedInt::positive_infinity());
    }

    #[test]
    fn test_sizes_compose() {
        let a = (0..5).filter(|i| i % 2 == 0);
        let b = std::iter::repeat(0).take(3);
        assert_eq!(a.bounded_upper() + b.bounded_upper(), BoundedInt::new(8));
        assert_eq!(
            (a.bounded_upper() - b.bounded_lower()).try_into_count(),
            Ok(2)
        );
        let unbounded = std::iter::repeat(0).bounded_upper();
        assert!((unbounded - unbounded).is_invalid());
    }

    #[test]
    fn test_bounded_count_empty() {
        assert_eq!(std::iter::empty::<u8>().bounded_count(), BoundedInt::new(0));
    }

    #[test]
    fn test_dyn_iterator() {
        let mut it: Box<dyn Iterator<Item = u32>> = Box::new(0..3);
        assert_eq!(it.bounded_upper(), BoundedInt::new(3));
        it.next();
        assert_eq!(it.as_ref().bounded_lower(), BoundedInt::new(2));
    }
}
