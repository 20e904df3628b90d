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

//! Equal-width algebraic evaluation.
//!
//! Used when no native type is wider than the widest participant. Both
//! operands are extended to a `W`-bit machine word `U`, the operation is
//! performed with wrapping `W`-bit arithmetic, and overflow is recovered
//! from the bits that were lost:
//!
//! - Addition and subtraction: a signed operand `v` with pattern `u`
//!   satisfies `v = u - n * 2^W`, where `n` is 1 iff `v` is negative. The
//!   exact result is therefore `low + high * 2^W`, where `low` is the wrapped
//!   word and `high` combines the carry (or borrow) with the operand signs.
//!   The result fits iff `high` is 0 (unsigned destination) or `high` agrees
//!   with the sign bit of `low` (signed destination).
//! - Multiplication: the magnitude product is checked with the division
//!   identity `(|x| * |y|) / |x| == |y|`; if it survives, the sign of the
//!   product decides whether the magnitude fits the destination.
//!
//! When the destination is narrower than `W`, the `W`-bit result must
//! additionally survive truncation into the destination.

use crate::num::{
    ops::checked_arithmetic::Overflowing, primitive::CkdInt, resolve::Operation,
};
use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

/// An unsigned machine word the algebraic checks operate on.
pub(crate) trait Word:
    PrimInt + Unsigned + WrappingAdd + WrappingSub + WrappingMul + WrappingNeg + 'static
{
    /// Keeps the low-order bits of `pattern`.
    fn from_pattern(pattern: u128) -> Self;

    /// Zero-extends `self` to 128 bits.
    fn to_pattern(self) -> u128;
}

macro_rules! impl_word {
    ($t:ty) => {
        impl Word for $t {
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

impl_word!(u8);
impl_word!(u16);
impl_word!(u32);
impl_word!(u64);
impl_word!(u128);

#[inline(always)]
fn sign_bit<U: Word>() -> U {
    U::max_value() ^ (U::max_value() >> 1)
}

#[inline(always)]
fn top_bit_set<U: Word>(u: U) -> bool {
    u & sign_bit::<U>() != U::zero()
}

/// An operand extended to the word width, tagged with its signedness.
#[derive(Debug, Clone, Copy)]
struct Operand<U> {
    bits: U,
    signed: bool,
}

impl<U: Word> Operand<U> {
    #[inline(always)]
    fn extend<T: CkdInt>(value: T) -> Self {
        Self {
            bits: U::from_pattern(value.to_pattern()),
            signed: T::DESCRIPTOR.is_signed(),
        }
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        self.signed && top_bit_set(self.bits)
    }

    #[inline(always)]
    fn magnitude(self) -> U {
        if self.is_negative() {
            self.bits.wrapping_neg()
        } else {
            self.bits
        }
    }
}

/// Returns `true` if `low + high * 2^W` is representable in a `W`-bit
/// destination of the given signedness.
#[inline(always)]
fn fits<U: Word>(high: i8, low: U, signed: bool) -> bool {
    if signed {
        match high {
            0 => !top_bit_set(low),
            -1 => top_bit_set(low),
            _ => false,
        }
    } else {
        high == 0
    }
}

#[inline]
fn add<U: Word>(x: Operand<U>, y: Operand<U>, signed_dest: bool) -> (U, bool) {
    let z = x.bits.wrapping_add(&y.bits);
    let overflowed = match (x.signed, y.signed, signed_dest) {
        (false, false, false) => z < x.bits,
        (true, true, true) => {
            let sx = x.is_negative();
            sx == y.is_negative() && top_bit_set(z) != sx
        }
        _ => {
            let carry = z < x.bits;
            let high = carry as i8 - x.is_negative() as i8 - y.is_negative() as i8;
            !fits(high, z, signed_dest)
        }
    };
    (z, overflowed)
}

#[inline]
fn sub<U: Word>(x: Operand<U>, y: Operand<U>, signed_dest: bool) -> (U, bool) {
    let z = x.bits.wrapping_sub(&y.bits);
    let overflowed = match (x.signed, y.signed, signed_dest) {
        (false, false, false) => z > x.bits,
        (true, true, true) => {
            let sx = x.is_negative();
            sx != y.is_negative() && top_bit_set(z) != sx
        }
        _ => {
            let borrow = x.bits < y.bits;
            let high = y.is_negative() as i8 - x.is_negative() as i8 - borrow as i8;
            !fits(high, z, signed_dest)
        }
    };
    (z, overflowed)
}

#[inline]
fn mul<U: Word>(x: Operand<U>, y: Operand<U>, signed_dest: bool) -> (U, bool) {
    let z = x.bits.wrapping_mul(&y.bits);
    if x.bits.is_zero() || y.bits.is_zero() {
        return (z, false);
    }

    if x.signed && y.signed && signed_dest {
        // MIN * -1: the magnitude of MIN has no positive counterpart.
        let min = sign_bit::<U>();
        let minus_one = U::max_value();
        if (x.bits == min && y.bits == minus_one) || (y.bits == min && x.bits == minus_one) {
            return (z, true);
        }
    }

    let mx = x.magnitude();
    let my = y.magnitude();
    let magnitude = mx.wrapping_mul(&my);
    if magnitude / mx != my {
        return (z, true);
    }

    let negative = x.is_negative() != y.is_negative();
    let overflowed = match (signed_dest, negative) {
        (false, negative) => negative,
        (true, false) => top_bit_set(magnitude),
        (true, true) => magnitude > sign_bit::<U>(),
    };
    (z, overflowed)
}

/// Evaluates `x op y` with `W`-bit wrapping arithmetic in the word `U`.
///
/// `U` must be at least as wide as `X`, `Y` and `Z`.
#[inline]
pub(crate) fn equal_width<U, Z, X, Y>(op: Operation, x: X, y: Y) -> Overflowing<Z>
where
    U: Word,
    Z: CkdInt,
    X: CkdInt,
    Y: CkdInt,
{
    debug_assert!(U::zero().count_zeros() >= Z::DESCRIPTOR.bits());

    let a = Operand::<U>::extend(x);
    let b = Operand::<U>::extend(y);
    let signed_dest = Z::DESCRIPTOR.is_signed();
    let (z, overflowed) = match op {
        Operation::Add => add(a, b, signed_dest),
        Operation::Sub => sub(a, b, signed_dest),
        Operation::Mul => mul(a, b, signed_dest),
    };

    let value = Z::from_pattern(z.to_pattern());
    let truncated = U::from_pattern(value.to_pattern()) != z;
    Overflowing::new(value, overflowed || truncated)
}
