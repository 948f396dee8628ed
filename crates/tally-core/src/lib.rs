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

//! # Tally Core
//!
//! Bounded signed integers for computing sizes, distances and offsets of
//! sequences whose length may be unknown or infinite.
//!
//! ## Modules
//!
//! - `num`: `BoundedInt<T>`, a signed integer that reserves its extreme values
//!   as positive infinity, negative infinity and an invalid (NaN-like) value.
//!   Arithmetic saturates instead of overflowing, sentinels propagate through
//!   every operator, and the invalid value is unordered. Also provides the
//!   `NumericLimits` capability trait and by-value checked/saturating
//!   arithmetic traits.
//! - `utils`: Iterator size hints expressed as bounded integers.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::num::bounded::BoundedInt;
//!
//! let size = BoundedInt::new(3i64) + BoundedInt::new(4);
//! assert_eq!(size, BoundedInt::new(7));
//!
//! let unknown = size + BoundedInt::positive_infinity();
//! assert!(!unknown.is_finite());
//! assert!((BoundedInt::new(0i64) / BoundedInt::new(0)).is_invalid());
//! ```

pub mod num;
pub mod utils;
