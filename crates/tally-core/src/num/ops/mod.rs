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

//! # Numeric Operations Traits
//!
//! By-value operation traits implemented uniformly for the signed primitives
//! and for [`BoundedInt`](crate::num::bounded::BoundedInt), so generic code
//! can bound on an operation without caring which of them it receives.
//!
//! ## Submodules
//!
//! - `checked_arithmetic`: `CheckedAddVal`, `CheckedSubVal`, `CheckedNegVal`,
//!   `CheckedDivVal` returning `Option<T>`. A `BoundedInt` result is `None`
//!   only when it is invalid.
//! - `saturating_arithmetic`: `SaturatingAddVal`, `SaturatingSubVal`,
//!   `SaturatingNegVal`. Primitives clamp to their bounds, `BoundedInt`
//!   clamps to its infinities.

pub mod checked_arithmetic;
pub mod saturating_arithmetic;
