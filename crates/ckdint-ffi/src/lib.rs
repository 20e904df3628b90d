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

//! # ckdint FFI
//!
//! C-compatible exports of the checked arithmetic core over `long` and
//! `unsigned long`.
//!
//! Each function is named `ckd_<op>_<z>_<x>_<y>`, where the three trailing
//! words give the signedness of the destination and of both operands. The
//! wrapped result is always written through `z`; the return value is the
//! overflow flag.
//!
//! Passing a `NULL` destination is a contract violation and aborts the
//! process (a panic cannot unwind across `extern "C"`), in keeping with a
//! fail-fast policy for host applications.

use ckdint_core::Checker;
use libc::{c_long, c_ulong};

macro_rules! export_ckd {
    ($name:ident, $op:ident, $z:ty, $x:ty, $y:ty) => {
        #[doc = concat!(
            "Checked `", stringify!($op), "` of a `", stringify!($x), "` and a `",
            stringify!($y), "` into a `", stringify!($z), "`."
        )]
        ///
        /// Returns `true` if the exact result does not fit the destination.
        /// The wrapped result is written either way.
        ///
        /// # Panics
        ///
        /// This function will panic if `z` is a null pointer.
        ///
        /// # Safety
        ///
        /// `z` must be valid for writes and properly aligned.
        #[no_mangle]
        pub unsafe extern "C" fn $name(z: *mut $z, x: $x, y: $y) -> bool {
            assert!(
                !z.is_null(),
                concat!("called `", stringify!($name), "` with null pointer")
            );

            let outcome = Checker::NATIVE.$op::<$z, $x, $y>(x, y);
            *z = outcome.value();
            outcome.overflowed()
        }
    };
}

export_ckd!(ckd_add_unsigned_unsigned_unsigned, add, c_ulong, c_ulong, c_ulong);
export_ckd!(ckd_add_signed_signed_signed, add, c_long, c_long, c_long);
export_ckd!(ckd_add_unsigned_signed_signed, add, c_ulong, c_long, c_long);

export_ckd!(ckd_sub_unsigned_unsigned_unsigned, sub, c_ulong, c_ulong, c_ulong);
export_ckd!(ckd_sub_signed_signed_signed, sub, c_long, c_long, c_long);
export_ckd!(ckd_sub_unsigned_signed_signed, sub, c_ulong, c_long, c_long);

export_ckd!(ckd_mul_unsigned_unsigned_unsigned, mul, c_ulong, c_ulong, c_ulong);
export_ckd!(ckd_mul_signed_signed_signed, mul, c_long, c_long, c_long);
export_ckd!(ckd_mul_unsigned_signed_signed, mul, c_ulong, c_long, c_long);
