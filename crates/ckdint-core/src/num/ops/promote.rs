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

//! Promote-and-compare evaluation.
//!
//! Both operands are extended into a native type strictly wider than every
//! participant, the operation is carried out exactly there, and the exact
//! result is compared against the destination's bounds before it is
//! truncated into the destination.

use crate::num::{
    ops::checked_arithmetic::Overflowing, primitive::CkdInt, resolve::Operation,
};
use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};

/// A native integer type usable as a promotion target.
pub(crate) trait DomainInt: PrimInt + WrappingAdd + WrappingSub + WrappingMul + 'static {
    /// Keeps the low-order bits of `pattern`.
    fn from_pattern(pattern: u128) -> Self;

    /// Sign- or zero-extends `self` to 128 bits.
    fn to_pattern(self) -> u128;
}

macro_rules! impl_domain_int {
    ($t:ty) => {
        impl DomainInt for $t {
            #[inline(always)]
            fn from_pattern(pattern: u128) -> Self {
                pattern as $t
            }

            #[inline(always)]
            fn to_pattern(self) -> u128 {
                self as u128
            }
        }
    };
}

impl_domain_int!(i16);
impl_domain_int!(u16);
impl_domain_int!(i32);
impl_domain_int!(u32);
impl_domain_int!(i64);
impl_domain_int!(u64);
impl_domain_int!(i128);
impl_domain_int!(u128);

/// Evaluates `x op y` in the domain `D` and range-checks the result against `Z`.
///
/// `D` must be strictly wider than `X`, `Y` and `Z`, and signed unless both
/// operands are unsigned and `op` is not a subtraction. Under those
/// conditions the wrapping operations below never actually wrap.
#[inline]
pub(crate) fn promote_and_compare<D, Z, X, Y>(op: Operation, x: X, y: Y) -> Overflowing<Z>
where
    D: DomainInt,
    Z: CkdInt,
    X: CkdInt,
    Y: CkdInt,
{
    debug_assert!(D::zero().count_zeros() > Z::DESCRIPTOR.bits());

    let a = D::from_pattern(x.to_pattern());
    let b = D::from_pattern(y.to_pattern());
    let exact = match op {
        Operation::Add => a.wrapping_add(&b),
        Operation::Sub => a.wrapping_sub(&b),
        Operation::Mul => a.wrapping_mul(&b),
    };

    let dest = Z::DESCRIPTOR;
    let max = D::from_pattern(dest.max_pattern());
    // An unsigned domain only ever holds non-negative results, which are
    // never below the destination minimum.
    let below = D::min_value() < D::zero() && exact < D::from_pattern(dest.min_pattern());
    let overflowed = below || exact > max;

    Overflowing::new(Z::from_pattern(exact.to_pattern()), overflowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_add_into_byte() {
        let r = promote_and_compare::<i16, i8, i8, i8>(Operation::Add, 127, 1);
        assert_eq!(r.into_tuple(), (-128, true));

        let r = promote_and_compare::<i16, i8, i8, i8>(Operation::Add, -100, 50);
        assert_eq!(r.into_tuple(), (-50, false));
    }

    #[test]
    fn test_mixed_signedness_into_unsigned() {
        let r = promote_and_compare::<i16, u8, u8, i8>(Operation::Add, 200, 100);
        assert_eq!(r.into_tuple(), (44, true));

        let r = promote_and_compare::<i16, u8, u8, i8>(Operation::Add, 200, -100);
        assert_eq!(r.into_tuple(), (100, false));

        let r = promote_and_compare::<i16, u8, u8, i8>(Operation::Add, 10, -11);
        assert_eq!(r.into_tuple(), (255, true));
    }

    #[test]
    fn test_unsigned_domain_into_signed_destination() {
        let r = promote_and_compare::<u16, i8, u8, u8>(Operation::Mul, 15, 8);
        assert_eq!(r.into_tuple(), (120, false));

        let r = promote_and_compare::<u16, i8, u8, u8>(Operation::Mul, 16, 8);
        assert_eq!(r.into_tuple(), (-128, true));

        let r = promote_and_compare::<u128, i64, u64, u64>(Operation::Mul, u64::MAX, u64::MAX);
        assert_eq!(r.into_tuple(), (1, true));
    }

    #[test]
    fn test_narrow_operands_wide_destination() {
        let r = promote_and_compare::<i128, u64, i8, i8>(Operation::Sub, -1, 0);
        assert_eq!(r.into_tuple(), (u64::MAX, true));

        let r = promote_and_compare::<i128, i64, i64, i64>(Operation::Sub, i64::MIN, 1);
        assert_eq!(r.into_tuple(), (i64::MAX, true));

        let r = promote_and_compare::<i128, i64, u64, i64>(Operation::Mul, 1u64 << 62, -2);
        assert_eq!(r.into_tuple(), (i64::MIN, false));
    }
}
