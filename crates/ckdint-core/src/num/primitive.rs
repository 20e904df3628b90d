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

//! The `CkdInt` trait: primitive integers that may take part in a checked
//! operation, either as an operand or as the destination.
//!
//! Each implementation pins its [`IntDescriptor`] as an associated constant,
//! which lets generic call sites resolve their computation strategy at
//! compile time. Values cross between types as two's-complement bit
//! patterns extended to 128 bits: signed types sign-extend, unsigned types
//! zero-extend, and truncation keeps the low-order bits.

use crate::num::descriptor::{IntDescriptor, Width};
use std::fmt::{Debug, Display};
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type supported by the checked arithmetic core.
///
/// This trait is sealed; it is implemented for `i8`, `i16`, `i32`, `i64`,
/// `i128`, `isize` and their unsigned counterparts.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::primitive::CkdInt;
/// assert_eq!((-1i8).to_pattern(), u128::MAX);
/// assert_eq!(255u8.to_pattern(), 255);
/// assert_eq!(i16::from_pattern(0x1_8000), i16::MIN);
/// ```
pub trait CkdInt:
    sealed::Sealed + Copy + Eq + Ord + Hash + Debug + Display + Default + Send + Sync + 'static
{
    /// Width and signedness of the implementing type.
    const DESCRIPTOR: IntDescriptor;

    /// Returns the two's-complement pattern of `self`, sign- or
    /// zero-extended to 128 bits.
    fn to_pattern(self) -> u128;

    /// Keeps the low-order bits of `pattern` and reinterprets them as `Self`.
    fn from_pattern(pattern: u128) -> Self;

    /// Returns `true` if `self` is below zero.
    #[inline(always)]
    fn is_negative(self) -> bool {
        Self::DESCRIPTOR.is_signed() && (self.to_pattern() >> 127) != 0
    }
}

const fn descriptor_for(bits: u32, signed: bool) -> IntDescriptor {
    match Width::from_bits(bits) {
        Ok(width) => IntDescriptor::of(width, signed),
        Err(_) => panic!("primitive integer width is not supported"),
    }
}

macro_rules! impl_ckd_int {
    ($t:ty, $signed:expr) => {
        impl sealed::Sealed for $t {}

        impl CkdInt for $t {
            const DESCRIPTOR: IntDescriptor = descriptor_for(<$t>::BITS, $signed);

            #[inline(always)]
            fn to_pattern(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn from_pattern(pattern: u128) -> Self {
                pattern as $t
            }
        }
    };
}

impl_ckd_int!(u8, false);
impl_ckd_int!(u16, false);
impl_ckd_int!(u32, false);
impl_ckd_int!(u64, false);
impl_ckd_int!(u128, false);
impl_ckd_int!(usize, false);

impl_ckd_int!(i8, true);
impl_ckd_int!(i16, true);
impl_ckd_int!(i32, true);
impl_ckd_int!(i64, true);
impl_ckd_int!(i128, true);
impl_ckd_int!(isize, true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors() {
        assert_eq!(u8::DESCRIPTOR, IntDescriptor::of(Width::W8, false));
        assert_eq!(i32::DESCRIPTOR, IntDescriptor::of(Width::W32, true));
        assert_eq!(u128::DESCRIPTOR, IntDescriptor::of(Width::W128, false));
        assert_eq!(isize::DESCRIPTOR.bits(), isize::BITS);
        assert!(isize::DESCRIPTOR.is_signed());
        assert!(!usize::DESCRIPTOR.is_signed());
    }

    #[test]
    fn test_patterns_extend_per_signedness() {
        assert_eq!((-2i8).to_pattern(), u128::MAX - 1);
        assert_eq!(254u8.to_pattern(), 254);
        assert_eq!(i64::MIN.to_pattern(), u128::MAX << 63);
        assert_eq!(u64::MAX.to_pattern(), u64::MAX as u128);
    }

    #[test]
    fn test_from_pattern_truncates() {
        assert_eq!(u8::from_pattern(300), 44);
        assert_eq!(i16::from_pattern(90000), 24464);
        assert_eq!(i16::from_pattern(40000), -25536);
        assert_eq!(i8::from_pattern(u128::MAX), -1);
        assert_eq!(u128::from_pattern(7), 7);
    }

    #[test]
    fn test_is_negative() {
        assert!((-1i32).is_negative());
        assert!(i128::MIN.is_negative());
        assert!(!0i8.is_negative());
        assert!(!u8::MAX.is_negative());
        assert!(!u128::MAX.is_negative());
    }
}
