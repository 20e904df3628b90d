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

//! # Width-Promotion Resolver
//!
//! Chooses how a checked operation is evaluated from the descriptors of its
//! two operands and its destination. The decision is a pure, total function
//! over the finite descriptor space:
//!
//! - Let `M` be the widest of the three participants. If a native type of
//!   `2M` bits exists and does not exceed the configured ceiling, the
//!   operation is evaluated exactly in that type and range-checked afterwards
//!   ([`Strategy::Promote`]).
//! - Otherwise the operation runs at `M` bits and overflow is detected
//!   algebraically from carries, borrows, sign bits and a division identity
//!   ([`Strategy::EqualWidth`]).
//!
//! The promoted type is unsigned only when both operands are unsigned and the
//! operation is an addition or a multiplication. Every other combination uses
//! a signed type. Doubling the width makes either choice wide enough for
//! every input pair:
//!
//! - `x + y` and `x - y` need at most `M + 2` bits including the sign.
//! - A product with at least one signed factor has magnitude below
//!   `2^(2M - 1)`.
//! - A product of two unsigned factors is below `2^(2M)`.

use crate::num::descriptor::{IntDescriptor, Width};
use std::fmt::{self, Display};

/// The arithmetic operations covered by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `x + y`
    Add,
    /// `x - y`
    Sub,
    /// `x * y`
    Mul,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Sub, Operation::Mul];

    /// The infix symbol of the operation.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
        };
        f.write_str(name)
    }
}

/// A native computation type strictly wider than every participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    I128,
    U128,
}

impl Domain {
    /// Returns the domain with the given width and signedness, or `None`
    /// for 8 bits (nothing is ever promoted into a byte).
    #[inline]
    pub const fn of(width: Width, signed: bool) -> Option<Self> {
        let domain = match (width, signed) {
            (Width::W8, _) => return None,
            (Width::W16, true) => Domain::I16,
            (Width::W16, false) => Domain::U16,
            (Width::W32, true) => Domain::I32,
            (Width::W32, false) => Domain::U32,
            (Width::W64, true) => Domain::I64,
            (Width::W64, false) => Domain::U64,
            (Width::W128, true) => Domain::I128,
            (Width::W128, false) => Domain::U128,
        };
        Some(domain)
    }

    /// The width and signedness of the domain.
    #[inline]
    pub const fn descriptor(self) -> IntDescriptor {
        match self {
            Domain::I16 => IntDescriptor::of(Width::W16, true),
            Domain::U16 => IntDescriptor::of(Width::W16, false),
            Domain::I32 => IntDescriptor::of(Width::W32, true),
            Domain::U32 => IntDescriptor::of(Width::W32, false),
            Domain::I64 => IntDescriptor::of(Width::W64, true),
            Domain::U64 => IntDescriptor::of(Width::W64, false),
            Domain::I128 => IntDescriptor::of(Width::W128, true),
            Domain::U128 => IntDescriptor::of(Width::W128, false),
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor())
    }
}

/// How a checked operation is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Compute exactly in the wider domain, then compare against the
    /// destination bounds.
    Promote(Domain),
    /// Compute at the given width with wrapping arithmetic and detect
    /// overflow algebraically.
    EqualWidth(Width),
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Promote(domain) => write!(f, "promote({domain})"),
            Strategy::EqualWidth(width) => write!(f, "equal-width({width})"),
        }
    }
}

/// Selects the evaluation strategy for `a op b` stored into `dest`.
///
/// `widest` is the widest native type the caller allows as a promotion
/// target. Operations whose promoted type would exceed it run through the
/// equal-width path instead.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::descriptor::{IntDescriptor, Width};
/// # use ckdint_core::num::resolve::{resolve, Domain, Operation, Strategy};
/// let u8d = IntDescriptor::of(Width::W8, false);
/// let i8d = IntDescriptor::of(Width::W8, true);
/// let i64d = IntDescriptor::of(Width::W64, true);
///
/// assert_eq!(
///     resolve(Operation::Add, u8d, i8d, u8d, Width::W128),
///     Strategy::Promote(Domain::I16)
/// );
/// assert_eq!(
///     resolve(Operation::Mul, i64d, i64d, i64d, Width::W64),
///     Strategy::EqualWidth(Width::W64)
/// );
/// ```
pub const fn resolve(
    op: Operation,
    a: IntDescriptor,
    b: IntDescriptor,
    dest: IntDescriptor,
    widest: Width,
) -> Strategy {
    let m = a.width().wider(b.width()).wider(dest.width());
    let wide = match m.doubled() {
        Some(wide) if wide.bits() <= widest.bits() => wide,
        _ => return Strategy::EqualWidth(m),
    };

    let unsigned = !a.is_signed() && !b.is_signed() && !matches!(op, Operation::Sub);
    match Domain::of(wide, !unsigned) {
        Some(domain) => Strategy::Promote(domain),
        None => Strategy::EqualWidth(m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_traits::{One, Zero};

    fn all_descriptors() -> impl Iterator<Item = IntDescriptor> {
        Width::ALL
            .into_iter()
            .flat_map(|w| [IntDescriptor::of(w, false), IntDescriptor::of(w, true)])
    }

    fn bounds(d: IntDescriptor) -> (BigInt, BigInt) {
        let bits = d.bits() as usize;
        if d.is_signed() {
            let half = BigInt::one() << (bits - 1);
            (-half.clone(), half - 1)
        } else {
            (BigInt::zero(), (BigInt::one() << bits) - 1)
        }
    }

    fn result_bounds(op: Operation, a: IntDescriptor, b: IntDescriptor) -> (BigInt, BigInt) {
        let (a_lo, a_hi) = bounds(a);
        let (b_lo, b_hi) = bounds(b);
        let candidates = match op {
            Operation::Add => [&a_lo + &b_lo, &a_hi + &b_hi, &a_lo + &b_hi, &a_hi + &b_lo],
            Operation::Sub => [&a_lo - &b_hi, &a_hi - &b_lo, &a_lo - &b_lo, &a_hi - &b_hi],
            Operation::Mul => [&a_lo * &b_lo, &a_lo * &b_hi, &a_hi * &b_lo, &a_hi * &b_hi],
        };
        let lo = candidates.iter().min().cloned().unwrap_or_default();
        let hi = candidates.iter().max().cloned().unwrap_or_default();
        (lo, hi)
    }

    #[test]
    fn test_resolver_table_is_total_and_sufficient() {
        for widest in Width::ALL {
            for op in Operation::ALL {
                for a in all_descriptors() {
                    for b in all_descriptors() {
                        for dest in all_descriptors() {
                            let m = a.width().wider(b.width()).wider(dest.width());
                            match resolve(op, a, b, dest, widest) {
                                Strategy::Promote(domain) => {
                                    let d = domain.descriptor();
                                    assert_eq!(d.bits(), 2 * m.bits());
                                    assert!(d.bits() <= widest.bits());

                                    let (lo, hi) = result_bounds(op, a, b);
                                    let (d_lo, d_hi) = bounds(d);
                                    assert!(
                                        d_lo <= lo && hi <= d_hi,
                                        "{d} cannot hold {a} {} {b}",
                                        op.symbol()
                                    );
                                }
                                Strategy::EqualWidth(w) => {
                                    assert_eq!(w, m);
                                    if let Some(wide) = m.doubled() {
                                        assert!(wide.bits() > widest.bits());
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_unsigned_domain_only_for_unsigned_add_and_mul() {
        let u32d = IntDescriptor::of(Width::W32, false);
        let i32d = IntDescriptor::of(Width::W32, true);

        assert_eq!(
            resolve(Operation::Add, u32d, u32d, u32d, Width::W128),
            Strategy::Promote(Domain::U64)
        );
        assert_eq!(
            resolve(Operation::Mul, u32d, u32d, i32d, Width::W128),
            Strategy::Promote(Domain::U64)
        );
        assert_eq!(
            resolve(Operation::Sub, u32d, u32d, u32d, Width::W128),
            Strategy::Promote(Domain::I64)
        );
        assert_eq!(
            resolve(Operation::Mul, u32d, i32d, u32d, Width::W128),
            Strategy::Promote(Domain::I64)
        );
    }

    #[test]
    fn test_destination_width_drives_promotion() {
        let u8d = IntDescriptor::of(Width::W8, false);
        let i64d = IntDescriptor::of(Width::W64, true);
        let u128d = IntDescriptor::of(Width::W128, false);

        assert_eq!(
            resolve(Operation::Add, u8d, u8d, i64d, Width::W128),
            Strategy::Promote(Domain::U128)
        );
        assert_eq!(
            resolve(Operation::Sub, u8d, u8d, i64d, Width::W128),
            Strategy::Promote(Domain::I128)
        );
        assert_eq!(
            resolve(Operation::Add, u8d, u8d, u128d, Width::W128),
            Strategy::EqualWidth(Width::W128)
        );
    }

    #[test]
    fn test_ceiling_forces_equal_width() {
        let i32d = IntDescriptor::of(Width::W32, true);
        let i64d = IntDescriptor::of(Width::W64, true);

        assert_eq!(
            resolve(Operation::Mul, i32d, i32d, i32d, Width::W64),
            Strategy::Promote(Domain::I64)
        );
        assert_eq!(
            resolve(Operation::Mul, i64d, i32d, i32d, Width::W64),
            Strategy::EqualWidth(Width::W64)
        );
        assert_eq!(
            resolve(Operation::Add, i32d, i32d, i32d, Width::W8),
            Strategy::EqualWidth(Width::W32)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::Promote(Domain::I16).to_string(), "promote(i16)");
        assert_eq!(
            Strategy::EqualWidth(Width::W128).to_string(),
            "equal-width(128 bits)"
        );
        assert_eq!(Operation::Mul.to_string(), "mul");
        assert_eq!(Domain::of(Width::W8, true), None);
    }
}
