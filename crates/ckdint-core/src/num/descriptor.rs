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

//! Width and signedness descriptors.
//!
//! Every participant of a checked operation (both operands and the
//! destination slot) is classified by an [`IntDescriptor`]: a supported bit
//! width paired with a signedness flag. Descriptors are plain `Copy` values
//! and every query on them is a `const fn`, so the resolver can run entirely
//! at compile time when the descriptors come from associated constants.

use std::fmt::{self, Display};

/// The bit widths understood by the checked arithmetic core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// 8 bits.
    W8,
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    W64,
    /// 128 bits.
    W128,
}

impl Width {
    /// All supported widths, narrowest first.
    pub const ALL: [Width; 5] = [Width::W8, Width::W16, Width::W32, Width::W64, Width::W128];

    /// Returns the number of bits of this width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ckdint_core::num::descriptor::Width;
    /// assert_eq!(Width::W32.bits(), 32);
    /// ```
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
            Width::W128 => 128,
        }
    }

    /// Converts a raw bit count into a `Width`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedWidthError`] if `bits` is not one of
    /// 8, 16, 32, 64 or 128.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ckdint_core::num::descriptor::Width;
    /// assert_eq!(Width::from_bits(64), Ok(Width::W64));
    /// assert!(Width::from_bits(24).is_err());
    /// ```
    #[inline]
    pub const fn from_bits(bits: u32) -> Result<Self, UnsupportedWidthError> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            128 => Ok(Width::W128),
            _ => Err(UnsupportedWidthError { bits }),
        }
    }

    /// Returns the width with twice as many bits, or `None` for `W128`.
    #[inline]
    pub const fn doubled(self) -> Option<Self> {
        match self {
            Width::W8 => Some(Width::W16),
            Width::W16 => Some(Width::W32),
            Width::W32 => Some(Width::W64),
            Width::W64 => Some(Width::W128),
            Width::W128 => None,
        }
    }

    /// Returns the wider of `self` and `other`.
    ///
    /// `Ord::max` is not usable in constant contexts, hence this helper.
    #[inline]
    pub const fn wider(self, other: Self) -> Self {
        if self.bits() >= other.bits() {
            self
        } else {
            other
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

impl TryFrom<u32> for Width {
    type Error = UnsupportedWidthError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Width::from_bits(bits)
    }
}

/// Error returned when a raw bit count does not name a supported width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedWidthError {
    /// The rejected bit count.
    pub bits: u32,
}

impl Display for UnsupportedWidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported integer width of {} bits (expected 8, 16, 32, 64 or 128)",
            self.bits
        )
    }
}

impl std::error::Error for UnsupportedWidthError {}

/// A `(width, signedness)` pair describing an integer type.
///
/// # Examples
///
/// ```rust
/// # use ckdint_core::num::descriptor::{IntDescriptor, Width};
/// let d = IntDescriptor::of(Width::W8, true);
/// assert_eq!(d.min_pattern() as u8, 0x80);
/// assert_eq!(d.max_pattern(), 127);
/// assert_eq!(d.to_string(), "i8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntDescriptor {
    width: Width,
    signed: bool,
}

impl IntDescriptor {
    /// Creates a descriptor from a supported width.
    #[inline]
    pub const fn of(width: Width, signed: bool) -> Self {
        Self { width, signed }
    }

    /// Creates a descriptor from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedWidthError`] if `bits` is not a supported width.
    #[inline]
    pub const fn new(bits: u32, signed: bool) -> Result<Self, UnsupportedWidthError> {
        match Width::from_bits(bits) {
            Ok(width) => Ok(Self { width, signed }),
            Err(e) => Err(e),
        }
    }

    /// Returns the width of the described type.
    #[inline]
    pub const fn width(self) -> Width {
        self.width
    }

    /// Returns the number of bits of the described type.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.width.bits()
    }

    /// Returns `true` if the described type is signed.
    #[inline]
    pub const fn is_signed(self) -> bool {
        self.signed
    }

    /// The minimum value of the described type as a two's-complement
    /// pattern sign-extended to 128 bits.
    #[inline]
    pub const fn min_pattern(self) -> u128 {
        if self.signed {
            u128::MAX << (self.bits() - 1)
        } else {
            0
        }
    }

    /// The maximum value of the described type, zero-extended to 128 bits.
    #[inline]
    pub const fn max_pattern(self) -> u128 {
        if self.signed {
            u128::MAX >> (129 - self.bits())
        } else {
            u128::MAX >> (128 - self.bits())
        }
    }
}

impl Display for IntDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.bits())
    }
}
