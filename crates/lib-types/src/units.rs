//! Grid and fixed-point units with type safety.
//!
//! These newtypes keep integer sample positions and Q15 coefficients from
//! being confused with plain integers or real-valued samples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-width of the kernel support in samples. The kernel is zero outside
/// `[-KERNEL_HALF_WIDTH, KERNEL_HALF_WIDTH]`.
pub const KERNEL_HALF_WIDTH: i32 = 6;

/// Number of integer abscissas on the kernel support.
pub const TAP_COUNT: usize = (2 * KERNEL_HALF_WIDTH + 1) as usize;

/// Number of fractional bits in a Q15 coefficient.
pub const Q15_FRAC_BITS: u32 = 15;

/// Scale between a real coefficient and its Q15 integer (2^15).
pub const Q15_SCALE: f64 = 32768.0;

/// An integer sample position on the kernel support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Abscissa(pub i32);

impl Abscissa {
    pub const ORIGIN: Self = Self(0);
    pub const MIN: Self = Self(-KERNEL_HALF_WIDTH);
    pub const MAX: Self = Self(KERNEL_HALF_WIDTH);

    /// Abscissa stored at a sample-table index (index 0 holds -6).
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(index as i32 - KERNEL_HALF_WIDTH)
    }

    /// Sample-table index of this abscissa, or `None` outside the support.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        if self.in_support() {
            Some((self.0 + KERNEL_HALF_WIDTH) as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn in_support(&self) -> bool {
        (Self::MIN.0..=Self::MAX.0).contains(&self.0)
    }

    #[inline]
    pub fn is_origin(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Every abscissa on the support, in ascending order.
    pub fn grid() -> impl Iterator<Item = Abscissa> {
        (Self::MIN.0..=Self::MAX.0).map(Abscissa)
    }
}

impl fmt::Display for Abscissa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed Q15 fixed-point coefficient stored in 32 bits.
///
/// The real value is `raw / 2^15`. Values are not clamped to 16 bits; the
/// resampler accumulates them in 32-bit registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Q15(pub i32);

impl Q15 {
    pub const ZERO: Self = Self(0);
    /// Real value 0.5.
    pub const HALF: Self = Self(1 << (Q15_FRAC_BITS - 1));

    #[inline]
    pub fn raw(&self) -> i32 {
        self.0
    }

    /// Recover the real-valued coefficient.
    #[inline]
    pub fn to_real(&self) -> f64 {
        self.0 as f64 / Q15_SCALE
    }
}

impl fmt::Display for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
