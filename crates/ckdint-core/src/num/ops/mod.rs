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

//! # Checked Operations
//!
//! The two evaluation engines and the public entry points built on them.
//!
//! ## Submodules
//!
//! - `promote`: exact evaluation in a strictly wider native type followed by
//!   a comparison against the destination bounds.
//! - `algebraic`: evaluation at the widest participant's width with carry,
//!   borrow, sign-flip and division-identity overflow detection.
//! - `checked_arithmetic`: `checked_add`/`checked_sub`/`checked_mul` (write
//!   into a slot, return the overflow flag), their `overflowing_*`
//!   counterparts returning [`checked_arithmetic::Overflowing`], the
//!   by-value `CkdOps` trait, and the configurable `Checker`.
//!
//! Both engines write the wrapped result unconditionally and report overflow
//! as a flag. Neither allocates, panics, or touches shared state.

pub(crate) mod algebraic;
pub mod checked_arithmetic;
pub(crate) mod promote;
