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

//! Shared helpers for the integration tests: an arbitrary-precision oracle
//! and the boundary vectors exercised for every primitive type.

#![allow(dead_code)]

use ckdint_core::{CkdInt, Operation};
use num_bigint::BigInt;
use num_traits::One;

/// Exact evaluation of `x op y`, wrapped and range-checked against `Z`.
pub fn oracle<Z, X, Y>(op: Operation, x: X, y: Y) -> (BigInt, bool)
where
    Z: CkdInt,
    X: CkdInt + Into<BigInt>,
    Y: CkdInt + Into<BigInt>,
{
    let a: BigInt = x.into();
    let b: BigInt = y.into();
    let exact = match op {
        Operation::Add => a + b,
        Operation::Sub => a - b,
        Operation::Mul => a * b,
    };

    let dest = Z::DESCRIPTOR;
    let bits = dest.bits() as usize;
    let modulus = BigInt::one() << bits;
    let mut wrapped = ((&exact % &modulus) + &modulus) % &modulus;
    let (lo, hi) = if dest.is_signed() {
        let half = BigInt::one() << (bits - 1);
        if wrapped >= half {
            wrapped -= &modulus;
        }
        (-half.clone(), half - 1)
    } else {
        (BigInt::from(0), modulus.clone() - 1)
    };

    let overflowed = exact < lo || exact > hi;
    (wrapped, overflowed)
}

/// Boundary values for `T`: small magnitudes of both signs, both extremes
/// and their neighbours, and the halves of both extremes with neighbours.
pub fn vectors<T: CkdInt>() -> Vec<T> {
    let d = T::DESCRIPTOR;
    let min = d.min_pattern();
    let max = d.max_pattern();
    let min_half = ((min as i128) / 2) as u128;
    let max_half = max / 2;

    let mut out = Vec::with_capacity(33);
    for k in 0..=6i128 {
        out.push(T::from_pattern(k as u128));
    }
    for k in 1..=6i128 {
        out.push(T::from_pattern((-k) as u128));
    }
    for k in 0..=4u128 {
        out.push(T::from_pattern(min.wrapping_add(k)));
        out.push(T::from_pattern(max.wrapping_sub(k)));
        out.push(T::from_pattern(min_half.wrapping_add(k)));
        out.push(T::from_pattern(max_half.wrapping_sub(k)));
    }
    out
}
