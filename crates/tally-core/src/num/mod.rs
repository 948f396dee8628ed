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

//! # Numeric Foundations
//!
//! Integer arithmetic for quantities that may be infinite or undefined.
//!
//! ## Submodules
//!
//! - `constants`: `SentinelRepr`, the signed primitives that can back a
//!   bounded integer, with their reserved sentinel values.
//! - `bounded`: `BoundedInt<T>`, a saturating, sentinel-propagating signed
//!   integer with IEEE-754-like unordered comparisons for its invalid value.
//! - `limits`: `NumericLimits`, a capability interface exposing finite bounds,
//!   infinity and quiet NaN for generic numeric code.
//! - `ops`: Checked and saturating by-value arithmetic traits implemented for
//!   the primitives and for `BoundedInt`.
//!
//! ## Motivation
//!
//! Sizes and distances of lazily computed sequences are not always finite or
//! even known. Floating point would lose integer precision and panicking or
//! `Result`-returning arithmetic does not compose inside generic algorithms.
//! `BoundedInt` keeps failure in-band: an invalid result is a value that
//! propagates and can be checked with `is_invalid` at any point.

pub mod bounded;
pub mod constants;
pub mod limits;
pub mod ops;
