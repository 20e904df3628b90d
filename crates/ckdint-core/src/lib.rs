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

//! # ckdint Core
//!
//! Overflow-checked integer arithmetic for operands and destinations of any
//! primitive width and signedness. Every operation computes the exact
//! mathematical result, stores it wrapped into the destination type, and
//! reports whether the wrap discarded information.
//!
//! ```rust
//! use ckdint_core::{checked_add, checked_mul, CkdOps};
//!
//! let mut z: u8 = 0;
//! assert!(checked_add(&mut z, 200u8, 100i8));
//! assert_eq!(z, 44);
//!
//! let mut p: i64 = 0;
//! assert!(!checked_mul(&mut p, u32::MAX, -2i32));
//! assert_eq!(p, -8_589_934_590);
//!
//! assert_eq!((-1i128).ckd_add::<u128, _>(1u8).into_option(), Some(0));
//! ```
//!
//! ## Modules
//!
//! - `num`: descriptors, the `CkdInt` primitive trait, the strategy resolver,
//!   and the checked operations themselves.
//!
//! ## Guarantees
//!
//! - The stored value is always the exact result modulo `2^N`, reinterpreted
//!   per the destination signedness.
//! - The overflow flag is `true` iff the exact result lies outside the
//!   destination range.
//! - No allocation, no panics, no shared state: every call is an independent
//!   pure computation, safe from any thread or signal context.

pub mod num;

pub use num::{
    descriptor::{IntDescriptor, UnsupportedWidthError, Width},
    ops::checked_arithmetic::{
        checked_add, checked_mul, checked_sub, overflowing_add, overflowing_mul,
        overflowing_sub, Checker, CkdOps, Overflowing,
    },
    primitive::CkdInt,
    resolve::{resolve, Domain, Operation, Strategy},
};
