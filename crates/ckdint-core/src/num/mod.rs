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
//! Type descriptors, the primitive integer trait, and the strategy resolver
//! that together drive overflow-checked arithmetic across mixed widths and
//! signedness.
//!
//! ## Submodules
//!
//! - `descriptor`: `Width` and `IntDescriptor`, the `(width, signedness)`
//!   vocabulary shared by every layer.
//! - `primitive`: `CkdInt`, implemented for all primitive integers, mapping
//!   each type to its descriptor and to a 128-bit two's-complement pattern.
//! - `resolve`: the Width-Promotion Resolver choosing between promotion into
//!   a wider native type and the equal-width algebraic check.
//! - `ops`: the engines and the public checked operations.

pub mod descriptor;
pub mod ops;
pub mod primitive;
pub mod resolve;
