//! Derivative orders of the interpolation kernel.
//!
//! Each order maps to one Farrow polynomial term. Tables for order `n` hold
//! the `n`th derivative divided by `n!`, so they can be used directly as
//! Taylor coefficients.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of derivative orders carried through the pipeline.
pub const DERIVATIVE_COUNT: usize = 4;

/// Derivative order of the kernel (0 is the kernel itself).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivativeOrder {
    Zeroth,
    First,
    Second,
    Third,
}

impl DerivativeOrder {
    /// All orders in interleaving order.
    pub const ALL: [Self; DERIVATIVE_COUNT] = [Self::Zeroth, Self::First, Self::Second, Self::Third];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Zeroth => 0,
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// `n!` for this order.
    #[inline]
    pub fn factorial(self) -> f64 {
        match self {
            Self::Zeroth | Self::First => 1.0,
            Self::Second => 2.0,
            Self::Third => 6.0,
        }
    }

    /// Weight `1 / 2^n` of this order in the combined worst-case magnitude.
    ///
    /// The resampler evaluates the Farrow polynomial at a phase of magnitude
    /// at most 1/2, so the `n`th term is scaled by at most `2^-n`.
    #[inline]
    pub fn farrow_weight(self) -> f64 {
        match self {
            Self::Zeroth => 1.0,
            Self::First => 0.5,
            Self::Second => 0.25,
            Self::Third => 0.125,
        }
    }

    /// Odd orders of an even kernel are odd functions.
    #[inline]
    pub fn is_odd(self) -> bool {
        self.index() % 2 == 1
    }
}

impl fmt::Display for DerivativeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "K{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_index_roundtrip() {
        for (i, order) in DerivativeOrder::ALL.iter().enumerate() {
            assert_eq!(order.index(), i);
        }
    }

    #[test]
    fn test_factorials_and_weights() {
        let factorials: Vec<f64> = DerivativeOrder::ALL.iter().map(|o| o.factorial()).collect();
        assert_eq!(factorials, vec![1.0, 1.0, 2.0, 6.0]);

        let weights: Vec<f64> = DerivativeOrder::ALL.iter().map(|o| o.farrow_weight()).collect();
        assert_eq!(weights, vec![1.0, 0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_display() {
        assert_eq!(DerivativeOrder::Second.to_string(), "K2");
        assert!(DerivativeOrder::Third.is_odd());
        assert!(!DerivativeOrder::Zeroth.is_odd());
    }
}
