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

use crate::num::{
    descriptor::Width,
    ops::{algebraic::equal_width, promote::promote_and_compare},
    primitive::CkdInt,
    resolve::{resolve, Domain, Operation, Strategy},
};
use std::fmt::{self, Display};

/// The outcome of a checked operation: the wrapped value and whether the
/// exact result was lost.
///
/// `value` always equals the exact result reduced modulo `2^N` (where `N` is
/// the destination width) and reinterpreted per the destination signedness,
/// whether or not overflow occurred.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::ops::checked_arithmetic::overflowing_add;
/// let r = overflowing_add::<u8, u8, i8>(200, 100);
/// assert_eq!(r.value(), 44);
/// assert!(r.overflowed());
/// assert_eq!(r.into_option(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overflowing<T> {
    value: T,
    overflowed: bool,
}

impl<T> Overflowing<T> {
    /// Creates a new outcome.
    #[inline(always)]
    pub const fn new(value: T, overflowed: bool) -> Self {
        Self { value, overflowed }
    }

    /// Returns the wrapped value.
    #[inline(always)]
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Returns `true` if the exact result did not fit the destination.
    #[inline(always)]
    pub const fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Returns the value if no overflow occurred.
    #[inline(always)]
    pub fn into_option(self) -> Option<T> {
        if self.overflowed {
            None
        } else {
            Some(self.value)
        }
    }

    /// Returns `(value, overflowed)`, the shape of the primitive
    /// `overflowing_*` methods.
    #[inline(always)]
    pub fn into_tuple(self) -> (T, bool) {
        (self.value, self.overflowed)
    }
}

impl<T: Display> Display for Overflowing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overflowed {
            write!(f, "{} (overflow)", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Evaluates checked operations under a fixed promotion ceiling.
///
/// The ceiling is the widest native type the resolver may promote into.
/// [`Checker::NATIVE`] allows 128-bit promotion, so only operations with a
/// 128-bit participant use the equal-width algebraic path. A host without
/// 128-bit integers is modelled by `Checker::with_widest(Width::W64)`.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::descriptor::Width;
/// # use ckdint_core::num::ops::checked_arithmetic::Checker;
/// # use ckdint_core::num::resolve::{Operation, Strategy};
/// let checker = Checker::with_widest(Width::W64);
/// assert_eq!(
///     checker.strategy::<i64, i64, i64>(Operation::Mul),
///     Strategy::EqualWidth(Width::W64)
/// );
/// assert_eq!(checker.mul::<i16, i16, i16>(300, 300).into_tuple(), (24464, true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checker {
    widest: Width,
}

impl Checker {
    /// Promotion into every native width, up to 128 bits.
    pub const NATIVE: Checker = Checker {
        widest: Width::W128,
    };

    /// Creates a checker that never promotes beyond `widest`.
    #[inline]
    pub const fn with_widest(widest: Width) -> Self {
        Self { widest }
    }

    /// Returns the promotion ceiling.
    #[inline]
    pub const fn widest(&self) -> Width {
        self.widest
    }

    /// Returns the strategy used for `X op Y` stored into `Z`.
    #[inline]
    pub const fn strategy<Z, X, Y>(&self, op: Operation) -> Strategy
    where
        Z: CkdInt,
        X: CkdInt,
        Y: CkdInt,
    {
        resolve(op, X::DESCRIPTOR, Y::DESCRIPTOR, Z::DESCRIPTOR, self.widest)
    }

    /// Evaluates `x op y` into the destination type `Z`.
    #[inline]
    pub fn evaluate<Z, X, Y>(&self, op: Operation, x: X, y: Y) -> Overflowing<Z>
    where
        Z: CkdInt,
        X: CkdInt,
        Y: CkdInt,
    {
        match self.strategy::<Z, X, Y>(op) {
            Strategy::Promote(domain) => match domain {
                Domain::I16 => promote_and_compare::<i16, Z, X, Y>(op, x, y),
                Domain::U16 => promote_and_compare::<u16, Z, X, Y>(op, x, y),
                Domain::I32 => promote_and_compare::<i32, Z, X, Y>(op, x, y),
                Domain::U32 => promote_and_compare::<u32, Z, X, Y>(op, x, y),
                Domain::I64 => promote_and_compare::<i64, Z, X, Y>(op, x, y),
                Domain::U64 => promote_and_compare::<u64, Z, X, Y>(op, x, y),
                Domain::I128 => promote_and_compare::<i128, Z, X, Y>(op, x, y),
                Domain::U128 => promote_and_compare::<u128, Z, X, Y>(op, x, y),
            },
            Strategy::EqualWidth(width) => match width {
                Width::W8 => equal_width::<u8, Z, X, Y>(op, x, y),
                Width::W16 => equal_width::<u16, Z, X, Y>(op, x, y),
                Width::W32 => equal_width::<u32, Z, X, Y>(op, x, y),
                Width::W64 => equal_width::<u64, Z, X, Y>(op, x, y),
                Width::W128 => equal_width::<u128, Z, X, Y>(op, x, y),
            },
        }
    }

    /// Checked `x + y` into `Z`.
    #[inline]
    pub fn add<Z: CkdInt, X: CkdInt, Y: CkdInt>(&self, x: X, y: Y) -> Overflowing<Z> {
        self.evaluate(Operation::Add, x, y)
    }

    /// Checked `x - y` into `Z`.
    #[inline]
    pub fn sub<Z: CkdInt, X: CkdInt, Y: CkdInt>(&self, x: X, y: Y) -> Overflowing<Z> {
        self.evaluate(Operation::Sub, x, y)
    }

    /// Checked `x * y` into `Z`.
    #[inline]
    pub fn mul<Z: CkdInt, X: CkdInt, Y: CkdInt>(&self, x: X, y: Y) -> Overflowing<Z> {
        self.evaluate(Operation::Mul, x, y)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checker(widest: {})", self.widest)
    }
}

/// Computes `x + y`, stores the wrapped result in `z` and returns `true` if
/// the exact sum does not fit `Z`.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::ops::checked_arithmetic::checked_add;
/// let mut z: i8 = 0;
/// assert!(checked_add(&mut z, 127i8, 1i8));
/// assert_eq!(z, -128);
///
/// let mut w: u64 = 0;
/// assert!(!checked_add(&mut w, -1i32, 2u8));
/// assert_eq!(w, 1);
/// ```
#[inline]
pub fn checked_add<Z: CkdInt, X: CkdInt, Y: CkdInt>(z: &mut Z, x: X, y: Y) -> bool {
    store(z, Checker::NATIVE.add(x, y))
}

/// Computes `x - y`, stores the wrapped result in `z` and returns `true` if
/// the exact difference does not fit `Z`.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::ops::checked_arithmetic::checked_sub;
/// let mut z: u32 = 0;
/// assert!(checked_sub(&mut z, 1u32, 2u32));
/// assert_eq!(z, u32::MAX);
/// ```
#[inline]
pub fn checked_sub<Z: CkdInt, X: CkdInt, Y: CkdInt>(z: &mut Z, x: X, y: Y) -> bool {
    store(z, Checker::NATIVE.sub(x, y))
}

/// Computes `x * y`, stores the wrapped result in `z` and returns `true` if
/// the exact product does not fit `Z`.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::ops::checked_arithmetic::checked_mul;
/// let mut z: i128 = 0;
/// assert!(checked_mul(&mut z, i128::MIN, -1i128));
/// assert_eq!(z, i128::MIN);
/// ```
#[inline]
pub fn checked_mul<Z: CkdInt, X: CkdInt, Y: CkdInt>(z: &mut Z, x: X, y: Y) -> bool {
    store(z, Checker::NATIVE.mul(x, y))
}

#[inline(always)]
fn store<Z: CkdInt>(z: &mut Z, outcome: Overflowing<Z>) -> bool {
    *z = outcome.value();
    outcome.overflowed()
}

/// Checked `x + y` into `Z`, returned by value.
#[inline]
pub fn overflowing_add<Z: CkdInt, X: CkdInt, Y: CkdInt>(x: X, y: Y) -> Overflowing<Z> {
    Checker::NATIVE.add(x, y)
}

/// Checked `x - y` into `Z`, returned by value.
#[inline]
pub fn overflowing_sub<Z: CkdInt, X: CkdInt, Y: CkdInt>(x: X, y: Y) -> Overflowing<Z> {
    Checker::NATIVE.sub(x, y)
}

/// Checked `x * y` into `Z`, returned by value.
#[inline]
pub fn overflowing_mul<Z: CkdInt, X: CkdInt, Y: CkdInt>(x: X, y: Y) -> Overflowing<Z> {
    Checker::NATIVE.mul(x, y)
}

/// By-value checked operations whose destination type is chosen by the caller.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::ops::checked_arithmetic::CkdOps;
/// let r = 300i32.ckd_mul::<i16, _>(300i32);
/// assert!(r.overflowed());
///
/// assert_eq!(u64::MAX.ckd_sub::<i8, _>(u64::MAX).into_option(), Some(0));
/// ```
pub trait CkdOps: CkdInt {
    /// Checked `self + y` into `Z`.
    fn ckd_add<Z: CkdInt, Y: CkdInt>(self, y: Y) -> Overflowing<Z>;

    /// Checked `self - y` into `Z`.
    fn ckd_sub<Z: CkdInt, Y: CkdInt>(self, y: Y) -> Overflowing<Z>;

    /// Checked `self * y` into `Z`.
    fn ckd_mul<Z: CkdInt, Y: CkdInt>(self, y: Y) -> Overflowing<Z>;
}

impl<T: CkdInt> CkdOps for T {
    #[inline(always)]
    fn ckd_add<Z: CkdInt, Y: CkdInt>(self, y: Y) -> Overflowing<Z> {
        overflowing_add(self, y)
    }

    #[inline(always)]
    fn ckd_sub<Z: CkdInt, Y: CkdInt>(self, y: Y) -> Overflowing<Z> {
        overflowing_sub(self, y)
    }

    #[inline(always)]
    fn ckd_mul<Z: CkdInt, Y: CkdInt>(self, y: Y) -> Overflowing<Z> {
        overflowing_mul(self, y)
    }
}
